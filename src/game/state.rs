use std::collections::{HashMap, VecDeque};

use chrono::Local;
use serde::Serialize;

use crate::config::game::{CHAT_CAPACITY, PLAYER_EMOJIS};
use crate::game::types::{Bomb, ChatMessage, FoundItem, Item, Phase, Player};

/// Sender name used for system chat notices.
pub const SYSTEM_SENDER: &str = "SYSTEM";

/// The single authoritative game state. Owned exclusively by the
/// `GameServer` actor; all mutation goes through its mailbox, so every
/// command is applied as one atomic step from a reader's perspective.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: Phase,
    pub players: HashMap<String, Player>,
    pub bombs: Vec<Bomb>,
    pub items: Vec<Item>,
    pub found_items: Vec<FoundItem>,
    pub chat: VecDeque<ChatMessage>,
    pub current_turn: Option<String>,
    /// Join order of active players; defines the turn rotation.
    pub player_order: Vec<String>,
    pub available_emojis: Vec<String>,
    pub winner: Option<String>,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            phase: Phase::Setup,
            players: HashMap::new(),
            bombs: Vec::new(),
            items: Vec::new(),
            found_items: Vec::new(),
            chat: VecDeque::new(),
            current_turn: None,
            player_order: Vec::new(),
            available_emojis: PLAYER_EMOJIS.iter().map(|e| e.to_string()).collect(),
            winner: None,
        }
    }

    /// Append a chat message, evicting the oldest once the buffer is full.
    pub fn push_chat(&mut self, sender: &str, message: String) {
        self.chat.push_back(ChatMessage {
            sender: sender.to_string(),
            message,
            time: Local::now().format("%H:%M:%S").to_string(),
        });
        while self.chat.len() > CHAT_CAPACITY {
            self.chat.pop_front();
        }
    }

    pub fn push_system_chat(&mut self, message: String) {
        self.push_chat(SYSTEM_SENDER, message);
    }

    /// Is the cell occupied by any player or bomb? Used for spawn placement
    /// only; entities may share cells afterwards (players walk onto bombs).
    pub fn cell_occupied(&self, x: usize, y: usize) -> bool {
        self.players.values().any(|p| p.x == x && p.y == y)
            || self.bombs.iter().any(|b| b.x == x && b.y == y)
    }

    /// Administrative reset: back to an empty setup phase with a full
    /// glyph pool. Clears chat before appending the reset notice.
    pub fn reset(&mut self) {
        *self = GameState::new();
        self.push_system_chat("🔄 Game reset! Everyone can rejoin!".to_string());
    }

    /// Build a read snapshot for the given requester. During setup each
    /// player only sees their own bombs.
    pub fn snapshot_for(&self, requester: &str) -> Snapshot {
        let bombs = if self.phase == Phase::Setup && !requester.is_empty() {
            self.bombs
                .iter()
                .filter(|b| b.owner == requester)
                .cloned()
                .collect()
        } else {
            self.bombs.clone()
        };

        Snapshot {
            phase: self.phase,
            players: self.players.clone(),
            bombs,
            items: self.items.clone(),
            chat: self.chat.iter().cloned().collect(),
            current_turn: self.current_turn.clone(),
            player_order: self.player_order.clone(),
            found_items: self.found_items.clone(),
            winner: self.winner.clone(),
        }
    }
}

/// Full point-in-time view of the game, rendered by the read façade.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub players: HashMap<String, Player>,
    pub bombs: Vec<Bomb>,
    pub items: Vec<Item>,
    pub chat: Vec<ChatMessage>,
    pub current_turn: Option<String>,
    pub player_order: Vec<String>,
    pub found_items: Vec<FoundItem>,
    pub winner: Option<String>,
}
