//! Setup-phase system: bomb placement and the transition into play.

use std::collections::HashSet;

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::channel::broker::{Broker, Queue};
use crate::channel::messages::StateNotice;
use crate::config::game::{GRID_SIZE, ITEMS_PER_PLAYER, MAX_BOMBS};
use crate::game::state::GameState;
use crate::game::types::{Bomb, Item, ItemKind, Phase};

/// Place a bomb during setup. Invalid requests (unknown player, quota
/// reached, out of bounds, cell already bombed) are silent no-ops, not
/// errors. Placing the final bomb starts the game.
pub fn place_bomb(state: &mut GameState, broker: &Broker, player_name: &str, x: i32, y: i32) {
    if state.phase != Phase::Setup {
        return;
    }

    let Some(player) = state.players.get(player_name) else {
        return;
    };
    if player.bombs_placed >= MAX_BOMBS {
        return;
    }

    if x < 0 || y < 0 || x as usize >= GRID_SIZE || y as usize >= GRID_SIZE {
        return;
    }
    let (x, y) = (x as usize, y as usize);

    // One bomb per cell.
    if state.bombs.iter().any(|b| b.x == x && b.y == y) {
        return;
    }

    state.bombs.push(Bomb {
        x,
        y,
        owner: player_name.to_string(),
    });

    let placed = match state.players.get_mut(player_name) {
        Some(player) => {
            player.bombs_placed += 1;
            player.bombs_placed
        }
        None => return,
    };

    state.push_system_chat(format!(
        "💣 {} places bomb {}/{}",
        player_name, placed, MAX_BOMBS
    ));

    maybe_start_game(state, broker);
}

/// Start the game if every present player has placed their full quota.
/// The setup-phase guard makes the transition fire exactly once.
pub fn maybe_start_game(state: &mut GameState, broker: &Broker) {
    if state.phase != Phase::Setup || state.players.is_empty() {
        return;
    }
    if state.players.values().all(|p| p.bombs_placed >= MAX_BOMBS) {
        start_game(state, broker);
    }
}

fn start_game(state: &mut GameState, broker: &Broker) {
    state.phase = Phase::Playing;
    generate_hidden_items(state);

    let num_players = state.players.len();
    let total_bombs = state.bombs.len();
    let total_items = state.items.len();

    info!(
        "[SETUP] Game started: {} players, {} bombs, {} items",
        num_players, total_bombs, total_items
    );

    state.push_system_chat("🎮 GAME ON! The items are hidden!".to_string());
    state.push_system_chat(format!(
        "📊 {} players | {} bombs | {} items",
        num_players, total_bombs, total_items
    ));
    if let Some(turn) = state.current_turn.clone() {
        state.push_system_chat(format!("▶️ {}'s turn", turn));
    }

    broker.publish(
        Queue::State,
        &StateNotice::PhaseChange {
            phase: "playing".to_string(),
            num_players,
            total_bombs,
            total_items,
        },
    );
}

/// Generate the hidden item pool and scatter it over unoccupied cells.
///
/// Ten items per player, with fixed type quotas (half apples, a quarter
/// stars, a fifth hearts, a tenth trap bombs, a twentieth diamonds); the
/// integer-division shortfall is padded with random harmless kinds. Items
/// land on cells free of players, bombs, and other items; placement stops
/// once the pool empties or the grid has no free cell left.
pub fn generate_hidden_items(state: &mut GameState) {
    state.items.clear();
    let num_items = state.players.len() * ITEMS_PER_PLAYER;

    let mut occupied: HashSet<(usize, usize)> = state
        .players
        .values()
        .map(|p| (p.x, p.y))
        .chain(state.bombs.iter().map(|b| (b.x, b.y)))
        .collect();

    let mut pool = Vec::with_capacity(num_items);
    pool.extend(std::iter::repeat(ItemKind::Apple).take(num_items / 2));
    pool.extend(std::iter::repeat(ItemKind::Star).take(num_items / 4));
    pool.extend(std::iter::repeat(ItemKind::Heart).take(num_items / 5));
    pool.extend(std::iter::repeat(ItemKind::BombExtra).take(num_items / 10));
    pool.extend(std::iter::repeat(ItemKind::Diamond).take(num_items / 20));

    let mut rng = rand::rng();
    let padding = [ItemKind::Apple, ItemKind::Star, ItemKind::Heart];
    while pool.len() < num_items {
        pool.push(padding[rng.random_range(0..padding.len())]);
    }

    pool.shuffle(&mut rng);

    // The quotas can overshoot num_items (they sum past it for some player
    // counts); the length bound truncates the excess.
    let total_cells = GRID_SIZE * GRID_SIZE;
    while state.items.len() < num_items && !pool.is_empty() && occupied.len() < total_cells {
        let x = rng.random_range(0..GRID_SIZE);
        let y = rng.random_range(0..GRID_SIZE);
        if occupied.insert((x, y)) {
            if let Some(kind) = pool.pop() {
                state.items.push(Item { x, y, kind });
            }
        }
    }
}
