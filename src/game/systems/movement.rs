//! Player movement system.
//!
//! Resolves one move command: turn check, clamped displacement, bomb
//! collision, item pickup, turn advancement.

use crate::channel::broker::Broker;
use crate::config::game::GRID_SIZE;
use crate::game::state::GameState;
use crate::game::systems::{items, turns};
use crate::game::types::{Direction, Phase};

/// Move the given player one cell in the given direction.
///
/// A no-op unless the game is in play, the player exists, and it is their
/// turn. Moving into a wall is legal but produces no displacement and does
/// not consume the turn. Bomb resolution comes strictly before item
/// resolution; an elimination by bomb ends the move before the item check.
pub fn move_player(state: &mut GameState, broker: &Broker, player_name: &str, direction: Direction) {
    if state.phase != Phase::Playing {
        return;
    }
    if state.current_turn.as_deref() != Some(player_name) {
        return;
    }
    let Some(player) = state.players.get_mut(player_name) else {
        return;
    };

    let (old_x, old_y) = (player.x, player.y);
    let (new_x, new_y) = match direction {
        Direction::Up => (old_x, old_y.saturating_sub(1)),
        Direction::Down => (old_x, (old_y + 1).min(GRID_SIZE - 1)),
        Direction::Left => (old_x.saturating_sub(1), old_y),
        Direction::Right => ((old_x + 1).min(GRID_SIZE - 1), old_y),
    };

    // Wall-clamped: nothing happened, turn stays.
    if (new_x, new_y) == (old_x, old_y) {
        return;
    }

    player.x = new_x;
    player.y = new_y;

    if let Some(idx) = state
        .bombs
        .iter()
        .position(|b| b.x == new_x && b.y == new_y)
    {
        // The bomb is consumed regardless of ownership; only foreign bombs
        // hurt.
        let bomb = state.bombs.remove(idx);
        if bomb.owner != player_name {
            let (hp, eliminated) = match state.players.get_mut(player_name) {
                Some(player) => {
                    player.hp -= 1;
                    player.score = player.score.saturating_sub(1);
                    (player.hp, player.hp <= 0)
                }
                None => return,
            };

            state.push_system_chat(format!("💣 {} hits a bomb! HP: {}", player_name, hp));

            if eliminated {
                state.push_system_chat(format!("💀 {} ELIMINATED!", player_name));
                turns::eliminate_player(state, player_name);
                turns::advance_turn(state);
                return;
            }
        }
    }

    // A cell can hold both a bomb and an item; surviving the bomb still
    // collects the item.
    if let Some(idx) = state
        .items
        .iter()
        .position(|i| i.x == new_x && i.y == new_y)
    {
        let item = state.items.remove(idx);
        items::resolve_item(state, broker, player_name, &item);
    }

    // The item may have eliminated the mover; only a surviving player's
    // move consumes the turn.
    if state.players.contains_key(player_name) {
        turns::advance_turn(state);
    }
}
