/// Game configuration constants.
///
/// This module defines the main gameplay parameters: grid dimensions,
/// bomb quota, item counts, and player identity glyphs.
pub const GRID_SIZE: usize = 15; // Side length of the square grid.

/// Bombs each player must place during the setup phase.
pub const MAX_BOMBS: u32 = 5;

/// Hidden items generated per player when the playing phase starts.
pub const ITEMS_PER_PLAYER: usize = 10;

/// HP a player starts with on join.
pub const STARTING_HP: i32 = 3;

/// Upper bound on HP (hearts cannot heal past this).
pub const MAX_HP: i32 = 5;

/// Maximum chat messages retained; oldest are evicted first.
pub const CHAT_CAPACITY: usize = 40;

/// Identity glyphs handed out to players in join order.
pub const PLAYER_EMOJIS: [&str; 8] = ["❤️", "⭐", "🌙", "🔥", "💎", "🌸", "🎵", "🦋"];

/// Glyph used once the pool is exhausted.
pub const FALLBACK_EMOJI: &str = "🎮";
