//! Player lobby system.
//!
//! Handles players entering and leaving the game: glyph assignment, spawn
//! placement, turn bookkeeping, and the shared removal path used by
//! voluntary leave, timeout eviction, and elimination.

use log::warn;
use rand::Rng;

use crate::channel::broker::{Broker, Queue};
use crate::channel::messages::StateNotice;
use crate::config::game::{FALLBACK_EMOJI, GRID_SIZE, PLAYER_EMOJIS};
use crate::game::state::GameState;
use crate::game::systems::{setup, turns};
use crate::game::types::{Phase, Player};

/// Add a player to the game. Idempotent: joining under an existing name is
/// a no-op (no duplicate entry, no glyph consumed).
pub fn add_player(state: &mut GameState, broker: &Broker, name: &str) {
    if state.players.contains_key(name) {
        return;
    }

    let emoji = if state.available_emojis.is_empty() {
        FALLBACK_EMOJI.to_string()
    } else {
        state.available_emojis.remove(0)
    };

    // Random free spawn cell; bounded attempts so a crowded grid cannot
    // stall the consumer.
    let mut rng = rand::rng();
    let mut x = rng.random_range(0..GRID_SIZE);
    let mut y = rng.random_range(0..GRID_SIZE);
    for _ in 0..100 {
        if !state.cell_occupied(x, y) {
            break;
        }
        x = rng.random_range(0..GRID_SIZE);
        y = rng.random_range(0..GRID_SIZE);
    }

    state
        .players
        .insert(name.to_string(), Player::new(x, y, emoji.clone()));
    state.player_order.push(name.to_string());

    // First joiner holds the opening turn.
    if state.player_order.len() == 1 {
        state.current_turn = Some(name.to_string());
    }

    state.push_system_chat(format!("{} {} joins the game!", emoji, name));

    broker.publish(
        Queue::State,
        &StateNotice::PlayerJoin {
            player: name.to_string(),
            emoji,
            total_players: state.players.len(),
        },
    );
}

/// Voluntary leave or timeout eviction. Same bookkeeping as elimination,
/// plus: during setup the leaver's bombs are discarded so their missing
/// placements cannot keep the remaining players stuck in setup.
pub fn remove_player(state: &mut GameState, broker: &Broker, name: &str) {
    if !state.players.contains_key(name) {
        return;
    }

    if state.phase == Phase::Setup {
        state.bombs.retain(|b| b.owner != name);
    }

    let Some(emoji) = unregister(state, name) else {
        return;
    };

    state.push_system_chat(format!("{} {} left the game!", emoji, name));

    // A departure mid-setup may complete the all-bombs-placed condition
    // for the players still present.
    setup::maybe_start_game(state, broker);
    turns::check_win(state);
}

/// Shared removal bookkeeping: return the glyph to the pool, drop the
/// player from the roster and turn order, and hand the turn to the head of
/// the order if the removed player held it. Returns the player's glyph.
pub(crate) fn unregister(state: &mut GameState, name: &str) -> Option<String> {
    let player = match state.players.remove(name) {
        Some(player) => player,
        None => {
            warn!("[LOBBY] Tried to unregister unknown player {}", name);
            return None;
        }
    };

    if PLAYER_EMOJIS.contains(&player.emoji.as_str()) {
        state.available_emojis.push(player.emoji.clone());
    }

    state.player_order.retain(|n| n != name);

    if state.current_turn.as_deref() == Some(name) {
        state.current_turn = state.player_order.first().cloned();
    }

    Some(player.emoji)
}
