use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Coarse lifecycle of the game: bomb placement, turn-based play, terminal.
/// Transitions only move forward; `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Apple,
    Star,
    Heart,
    BombExtra,
    Diamond,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    pub score: u32,
    pub emoji: String,
    pub hp: i32,
    pub bombs_placed: u32,
    /// Refreshed by heartbeats; drives sweeper eviction. Never serialized.
    #[serde(skip_serializing)]
    pub last_seen: Instant,
}

impl Player {
    pub fn new(x: usize, y: usize, emoji: String) -> Self {
        Self {
            x,
            y,
            score: 0,
            emoji,
            hp: crate::config::game::STARTING_HP,
            bombs_placed: 0,
            last_seen: Instant::now(),
        }
    }
}

/// A bomb placed during setup. Consumed on first collision, owner included.
#[derive(Debug, Clone, Serialize)]
pub struct Bomb {
    pub x: usize,
    pub y: usize,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// Transient marker for a just-collected item, shown briefly to clients
/// and pruned by the sweeper. Cosmetic only.
#[derive(Debug, Clone, Serialize)]
pub struct FoundItem {
    pub x: usize,
    pub y: usize,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(skip_serializing)]
    pub found_at: Instant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
    pub time: String,
}
