//! Command consumers.
//!
//! One task per queue, each a strictly sequential loop: receive, decode,
//! forward to the `GameServer` actor, continue. Decode failures are logged
//! and the message is dropped; nothing here can take the loop down. Receiving
//! from the in-process queue removes the message, which doubles as the
//! acknowledgment required by the at-most-once processing contract.

use actix::Addr;
use log::{error, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::channel::broker::QueueReceivers;
use crate::channel::messages::{ActionCommand, ChatCommand, MoveCommand};
use crate::server::game_server::GameServer;
use crate::server::messages::{ChatPost, JoinGame, PlaceBomb, PlayerMove};

/// Spawn all five consumer loops. Consumes the queue receivers, so it can
/// only be called once per broker.
pub fn spawn_consumers(receivers: QueueReceivers, game: Addr<GameServer>) {
    tokio::spawn(statistics_consumer(receivers.statistics));
    tokio::spawn(state_consumer(receivers.state));
    tokio::spawn(moves_consumer(receivers.moves, game.clone()));
    tokio::spawn(chat_consumer(receivers.chat, game.clone()));
    tokio::spawn(actions_consumer(receivers.actions, game));
}

/// Statistics are informational: validated, logged, and nothing else.
async fn statistics_consumer(mut rx: UnboundedReceiver<String>) {
    info!("[STATISTICS CONSUMER] Started");
    while let Some(raw) = rx.recv().await {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(data) => info!("[STATISTICS] {}", data),
            Err(e) => warn!("[STATISTICS] Dropping malformed message: {}", e),
        }
    }
    error!("[STATISTICS CONSUMER] Queue closed");
}

/// State notifications are informational: validated, logged, and nothing else.
async fn state_consumer(mut rx: UnboundedReceiver<String>) {
    info!("[STATE CONSUMER] Started");
    while let Some(raw) = rx.recv().await {
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(data) => info!("[STATE] {}", data),
            Err(e) => warn!("[STATE] Dropping malformed message: {}", e),
        }
    }
    error!("[STATE CONSUMER] Queue closed");
}

async fn moves_consumer(mut rx: UnboundedReceiver<String>, game: Addr<GameServer>) {
    info!("[MOVES CONSUMER] Started");
    while let Some(raw) = rx.recv().await {
        match serde_json::from_str::<MoveCommand>(&raw) {
            Ok(MoveCommand::Move { player, direction }) => {
                info!("[MOVES] {} moved: {:?}", player, direction);
                game.do_send(PlayerMove { player, direction });
            }
            Ok(MoveCommand::PlaceBomb { player, x, y }) => {
                info!("[MOVES] {} placed bomb: ({}, {})", player, x, y);
                game.do_send(PlaceBomb { player, x, y });
            }
            Err(e) => warn!("[MOVES] Dropping malformed message: {}", e),
        }
    }
    error!("[MOVES CONSUMER] Queue closed");
}

async fn chat_consumer(mut rx: UnboundedReceiver<String>, game: Addr<GameServer>) {
    info!("[CHAT CONSUMER] Started");
    while let Some(raw) = rx.recv().await {
        match serde_json::from_str::<ChatCommand>(&raw) {
            Ok(cmd) => {
                info!("[CHAT] {}: {}", cmd.player, cmd.message);
                game.do_send(ChatPost {
                    player: cmd.player,
                    message: cmd.message,
                });
            }
            Err(e) => warn!("[CHAT] Dropping malformed message: {}", e),
        }
    }
    error!("[CHAT CONSUMER] Queue closed");
}

async fn actions_consumer(mut rx: UnboundedReceiver<String>, game: Addr<GameServer>) {
    info!("[ACTIONS CONSUMER] Started");
    while let Some(raw) = rx.recv().await {
        match serde_json::from_str::<ActionCommand>(&raw) {
            Ok(ActionCommand::Join { player }) => {
                info!("[ACTIONS] {} joined the game", player);
                game.do_send(JoinGame { player });
            }
            Err(e) => warn!("[ACTIONS] Dropping malformed message: {}", e),
        }
    }
    error!("[ACTIONS CONSUMER] Queue closed");
}
