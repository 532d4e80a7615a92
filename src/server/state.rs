//! Application state for the backend server.
//!
//! Holds the broker publisher handle and the game server actor address.
//! Used to share state between HTTP handlers and the actor system.

use actix::Addr;

use crate::channel::broker::Broker;
use crate::server::game_server::GameServer;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    /// Publisher handle for the five command queues.
    pub broker: Broker,
    /// Address of the game server actor (sole owner of the game state).
    pub game: Addr<GameServer>,
}

impl AppState {
    pub fn new(broker: Broker, game: Addr<GameServer>) -> Self {
        AppState { broker, game }
    }
}
