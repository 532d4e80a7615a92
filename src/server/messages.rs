//! Actix messages accepted by the `GameServer` actor.
//!
//! `JoinGame`, `PlayerMove`, `PlaceBomb`, and `ChatPost` arrive through the
//! command-channel consumers. `Heartbeat`, `LeaveGame`, `ResetGame`, and
//! `GetSnapshot` come straight from the HTTP façade: heartbeats are
//! timing-sensitive and bypass the queues by design, the rest are
//! administrative or read-only.

use actix::prelude::*;

use crate::game::state::Snapshot;
use crate::game::types::Direction;

#[derive(Message)]
#[rtype(result = "()")]
pub struct JoinGame {
    pub player: String,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayerMove {
    pub player: String,
    pub direction: Direction,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct PlaceBomb {
    pub player: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ChatPost {
    pub player: String,
    pub message: String,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Heartbeat {
    pub player: String,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct LeaveGame {
    pub player: String,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ResetGame;

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot {
    /// Requesting player; during setup the snapshot hides other players'
    /// bombs from them. Empty for spectators.
    pub player: String,
}
