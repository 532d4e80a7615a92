//! Turn rotation, elimination, and the win/elimination state machine.

use crate::game::state::GameState;
use crate::game::systems::lobby;
use crate::game::types::Phase;

/// Remove an eliminated player and re-evaluate the win condition. The
/// caller is responsible for the elimination chat notice; this function
/// only does the bookkeeping.
pub fn eliminate_player(state: &mut GameState, name: &str) {
    if lobby::unregister(state, name).is_none() {
        return;
    }
    check_win(state);
}

/// Hand the turn to the next player in rotation.
///
/// An empty rotation clears the turn; a holder who vanished from the
/// rotation (eliminated elsewhere) resets it to the head; otherwise the
/// turn moves one step cyclically. Every successful handover gets a chat
/// notice naming the new holder.
pub fn advance_turn(state: &mut GameState) {
    if state.player_order.is_empty() {
        state.current_turn = None;
        check_win(state);
        return;
    }

    let current_index = state
        .current_turn
        .as_ref()
        .and_then(|c| state.player_order.iter().position(|n| n == c));

    let next = match current_index {
        Some(i) => state.player_order[(i + 1) % state.player_order.len()].clone(),
        None => state.player_order[0].clone(),
    };

    state.current_turn = Some(next.clone());
    state.push_system_chat(format!("▶️ {}'s turn", next));
}

/// Finish the game when no items remain, or at most one player does.
///
/// With zero players nothing is recorded; otherwise the highest score wins,
/// ties recorded as a comma-joined list of the tied names.
pub fn check_win(state: &mut GameState) {
    if state.phase != Phase::Playing {
        return;
    }

    let all_items_found = state.items.is_empty();
    let one_player = state.players.len() == 1;
    let no_players = state.players.is_empty();

    if !(all_items_found || one_player || no_players) {
        return;
    }

    state.phase = Phase::Finished;

    if no_players {
        state.push_system_chat("🎮 Game over! Everyone eliminated!".to_string());
        return;
    }

    let max_score = state.players.values().map(|p| p.score).max().unwrap_or(0);
    // Walk player_order so tie lists come out in join order.
    let winners: Vec<String> = state
        .player_order
        .iter()
        .filter(|n| {
            state
                .players
                .get(*n)
                .map(|p| p.score == max_score)
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    if winners.len() == 1 {
        let winner = winners.into_iter().next().unwrap_or_default();
        let emoji = state
            .players
            .get(&winner)
            .map(|p| p.emoji.clone())
            .unwrap_or_default();
        state.push_system_chat(format!(
            "🎉 {} {} WINS with {} points!",
            emoji, winner, max_score
        ));
        state.winner = Some(winner);
    } else {
        let tie = winners.join(", ");
        state.push_system_chat(format!("🎉 TIE! {} with {} points!", tie, max_score));
        state.winner = Some(tie);
    }
}
