//! Item resolution system.
//!
//! Applies the effect of a picked-up item, records the transient found-item
//! marker, publishes the pickup to the statistics queue, and re-evaluates
//! the win condition.

use std::time::Instant;

use crate::channel::broker::{Broker, Queue};
use crate::channel::messages::StatsNotice;
use crate::config::game::MAX_HP;
use crate::game::state::GameState;
use crate::game::systems::turns;
use crate::game::types::{FoundItem, Item, ItemKind};

/// Resolve a picked-up item for the given player. The item has already
/// been removed from the board by the caller. A trap bomb that drops the
/// player to zero HP eliminates them and ends resolution early (no
/// statistics notification for a fatal pickup).
pub fn resolve_item(state: &mut GameState, broker: &Broker, player_name: &str, item: &Item) {
    state.found_items.push(FoundItem {
        x: item.x,
        y: item.y,
        kind: item.kind,
        found_at: Instant::now(),
    });

    let Some(player) = state.players.get_mut(player_name) else {
        return;
    };

    let notice = match item.kind {
        ItemKind::Apple => {
            player.score += 1;
            format!("🍎 {} found an apple! +1 | Total: {}", player_name, player.score)
        }
        ItemKind::Star => {
            player.score += 3;
            format!("⭐ {} found a star! +3 | Total: {}", player_name, player.score)
        }
        ItemKind::Diamond => {
            player.score += 5;
            format!("💎 {} found a diamond! +5 | Total: {}", player_name, player.score)
        }
        ItemKind::Heart => {
            player.hp = (player.hp + 1).min(MAX_HP);
            format!("❤️ {} found a heart! +1 HP | HP: {}", player_name, player.hp)
        }
        ItemKind::BombExtra => {
            player.hp -= 1;
            player.score = player.score.saturating_sub(1);
            format!("💥 {} found a bomb! -1 HP", player_name)
        }
    };

    let (score, hp) = (player.score, player.hp);
    state.push_system_chat(notice);

    if item.kind == ItemKind::BombExtra && hp <= 0 {
        state.push_system_chat(format!("💀 {} ELIMINATED!", player_name));
        turns::eliminate_player(state, player_name);
        return;
    }

    broker.publish(
        Queue::Statistics,
        &StatsNotice::ItemFound {
            player: player_name.to_string(),
            item_type: item.kind,
            score,
            hp,
        },
    );

    turns::check_win(state);
}
