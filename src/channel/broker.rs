//! In-process command broker.
//!
//! Five durable-in-spirit queues, one per command category. Each queue is an
//! unbounded mpsc channel: FIFO delivery, exactly one consumer, non-blocking
//! publish. Transport concerns (reconnection, persistence) live outside the
//! core; this module only guarantees the publish/subscribe contract.

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// The five command categories, each backed by its own queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queue {
    Statistics,
    State,
    Moves,
    Chat,
    Actions,
}

impl Queue {
    pub fn name(&self) -> &'static str {
        match self {
            Queue::Statistics => "game_statistics",
            Queue::State => "game_state",
            Queue::Moves => "game_moves",
            Queue::Chat => "game_chat",
            Queue::Actions => "game_actions",
        }
    }
}

/// Cloneable publisher handle over all five queues.
#[derive(Clone)]
pub struct Broker {
    statistics: UnboundedSender<String>,
    state: UnboundedSender<String>,
    moves: UnboundedSender<String>,
    chat: UnboundedSender<String>,
    actions: UnboundedSender<String>,
}

/// Receiving ends of the five queues; consumed exactly once by
/// `consumer::spawn_consumers`.
pub struct QueueReceivers {
    pub statistics: UnboundedReceiver<String>,
    pub state: UnboundedReceiver<String>,
    pub moves: UnboundedReceiver<String>,
    pub chat: UnboundedReceiver<String>,
    pub actions: UnboundedReceiver<String>,
}

impl Broker {
    /// Create a broker together with the receiving ends of its queues.
    pub fn channel() -> (Broker, QueueReceivers) {
        let (statistics_tx, statistics_rx) = unbounded_channel();
        let (state_tx, state_rx) = unbounded_channel();
        let (moves_tx, moves_rx) = unbounded_channel();
        let (chat_tx, chat_rx) = unbounded_channel();
        let (actions_tx, actions_rx) = unbounded_channel();

        (
            Broker {
                statistics: statistics_tx,
                state: state_tx,
                moves: moves_tx,
                chat: chat_tx,
                actions: actions_tx,
            },
            QueueReceivers {
                statistics: statistics_rx,
                state: state_rx,
                moves: moves_rx,
                chat: chat_rx,
                actions: actions_rx,
            },
        )
    }

    /// Publish a message to the given queue. Fire-and-forget: serialization
    /// or delivery failure is logged and the message is lost.
    pub fn publish(&self, queue: Queue, payload: &impl Serialize) {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(e) => {
                warn!("[{}] Failed to serialize message: {}", queue.name(), e);
                return;
            }
        };

        let sender = match queue {
            Queue::Statistics => &self.statistics,
            Queue::State => &self.state,
            Queue::Moves => &self.moves,
            Queue::Chat => &self.chat,
            Queue::Actions => &self.actions,
        };

        match sender.send(body) {
            Ok(()) => debug!("[{}] Message published", queue.name()),
            Err(e) => warn!("[{}] Queue unavailable, message lost: {}", queue.name(), e),
        }
    }
}
