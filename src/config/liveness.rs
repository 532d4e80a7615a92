/// Liveness sweeper configuration constants.
///
/// This module defines the timing parameters for evicting silent players
/// and expiring transient found-item markers.
pub const SWEEP_INTERVAL_SECS: u64 = 5; // How often the sweeper runs (in seconds).

/// Time (in seconds) without a heartbeat before a player is evicted.
pub const PLAYER_TIMEOUT_SECS: u64 = 10;

/// Display window (in seconds) for found-item markers before they are pruned.
pub const FOUND_ITEM_TTL_SECS: u64 = 3;
