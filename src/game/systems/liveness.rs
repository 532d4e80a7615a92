//! Liveness sweeper.
//!
//! Runs on a fixed interval from the `GameServer` actor: evicts players
//! whose heartbeat went silent and prunes expired found-item markers.

use std::time::{Duration, Instant};

use log::info;

use crate::channel::broker::Broker;
use crate::config::liveness::{FOUND_ITEM_TTL_SECS, PLAYER_TIMEOUT_SECS};
use crate::game::state::GameState;
use crate::game::systems::lobby;

/// One sweep pass. Timed-out players leave through the same path as a
/// voluntary departure (glyph returned, turn reassigned, win re-checked).
pub fn sweep(state: &mut GameState, broker: &Broker) {
    let now = Instant::now();

    let timeout = Duration::from_secs(PLAYER_TIMEOUT_SECS);
    let inactive: Vec<String> = state
        .players
        .iter()
        .filter(|(_, p)| now.duration_since(p.last_seen) > timeout)
        .map(|(name, _)| name.clone())
        .collect();

    for name in inactive {
        info!("[SWEEPER] Evicting {} after heartbeat timeout", name);
        lobby::remove_player(state, broker, &name);
    }

    let ttl = Duration::from_secs(FOUND_ITEM_TTL_SECS);
    state
        .found_items
        .retain(|marker| now.duration_since(marker.found_at) < ttl);
}
