//! Wire shapes for the command queues.
//!
//! Each queue has a tagged command type decoded exactly once by its
//! consumer; anything that does not fit a variant is the malformed-command
//! path (dropped with a warning). The state and statistics queues carry
//! free-form informational payloads and have no command type here.

use serde::{Deserialize, Serialize};

use crate::game::types::{Direction, ItemKind};

/// Commands on the actions queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionCommand {
    Join { player: String },
}

/// Commands on the moves queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MoveCommand {
    Move { player: String, direction: Direction },
    PlaceBomb { player: String, x: i32, y: i32 },
}

/// Commands on the chat queue. Extra fields on the wire are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCommand {
    pub player: String,
    pub message: String,
}

/// Informational notification published to the state queue.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateNotice {
    PlayerJoin {
        player: String,
        emoji: String,
        total_players: usize,
    },
    PhaseChange {
        phase: String,
        num_players: usize,
        total_bombs: usize,
        total_items: usize,
    },
}

/// Informational notification published to the statistics queue.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatsNotice {
    ItemFound {
        player: String,
        item_type: ItemKind,
        score: u32,
        hp: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_join_command() {
        let cmd: ActionCommand =
            serde_json::from_str(r#"{"action":"join","player":"ana"}"#).unwrap();
        let ActionCommand::Join { player } = cmd;
        assert_eq!(player, "ana");
    }

    #[test]
    fn decodes_move_and_place_bomb() {
        let cmd: MoveCommand =
            serde_json::from_str(r#"{"action":"move","player":"ana","direction":"UP"}"#).unwrap();
        assert!(matches!(
            cmd,
            MoveCommand::Move { direction: Direction::Up, .. }
        ));

        let cmd: MoveCommand =
            serde_json::from_str(r#"{"action":"place_bomb","player":"ana","x":3,"y":7}"#).unwrap();
        assert!(matches!(cmd, MoveCommand::PlaceBomb { x: 3, y: 7, .. }));
    }

    #[test]
    fn chat_command_ignores_extra_fields() {
        let cmd: ChatCommand =
            serde_json::from_str(r#"{"action":"chat","player":"ana","message":"hi"}"#).unwrap();
        assert_eq!(cmd.player, "ana");
        assert_eq!(cmd.message, "hi");
    }

    #[test]
    fn unknown_action_is_malformed() {
        assert!(serde_json::from_str::<MoveCommand>(
            r#"{"action":"teleport","player":"ana"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<ActionCommand>(r#"{"player":"ana"}"#).is_err());
    }

    #[test]
    fn direction_uses_uppercase_wire_names() {
        assert!(serde_json::from_str::<Direction>(r#""LEFT""#).is_ok());
        assert!(serde_json::from_str::<Direction>(r#""left""#).is_err());
    }
}
