//! The game server actor.
//!
//! Owns the single authoritative `GameState`. All five command consumers
//! and the HTTP façade submit work through this actor's mailbox, which
//! serializes every mutation: one message, one atomic state change. The
//! liveness sweeper runs on this actor's timer for the same reason.

use std::time::{Duration, Instant};

use actix::prelude::*;
use log::info;

use crate::channel::broker::Broker;
use crate::config::liveness::SWEEP_INTERVAL_SECS;
use crate::game::state::GameState;
use crate::game::systems::{liveness, lobby, movement, setup};
use crate::server::messages::{
    ChatPost, GetSnapshot, Heartbeat, JoinGame, LeaveGame, PlaceBomb, PlayerMove, ResetGame,
};

pub struct GameServer {
    state: GameState,
    broker: Broker,
}

impl GameServer {
    pub fn new(broker: Broker) -> Self {
        Self {
            state: GameState::new(),
            broker,
        }
    }
}

impl Actor for GameServer {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[GameServer] Started; sweeping for inactive players every {}s",
            SWEEP_INTERVAL_SECS
        );
        ctx.run_interval(Duration::from_secs(SWEEP_INTERVAL_SECS), |act, _| {
            liveness::sweep(&mut act.state, &act.broker);
        });
    }
}

impl Handler<JoinGame> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: JoinGame, _: &mut Context<Self>) -> Self::Result {
        lobby::add_player(&mut self.state, &self.broker, &msg.player);
    }
}

impl Handler<PlayerMove> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: PlayerMove, _: &mut Context<Self>) -> Self::Result {
        movement::move_player(&mut self.state, &self.broker, &msg.player, msg.direction);
    }
}

impl Handler<PlaceBomb> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: PlaceBomb, _: &mut Context<Self>) -> Self::Result {
        setup::place_bomb(&mut self.state, &self.broker, &msg.player, msg.x, msg.y);
    }
}

impl Handler<ChatPost> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: ChatPost, _: &mut Context<Self>) -> Self::Result {
        self.state.push_chat(&msg.player, msg.message);
    }
}

impl Handler<Heartbeat> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Heartbeat, _: &mut Context<Self>) -> Self::Result {
        if let Some(player) = self.state.players.get_mut(&msg.player) {
            player.last_seen = Instant::now();
        }
    }
}

impl Handler<LeaveGame> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: LeaveGame, _: &mut Context<Self>) -> Self::Result {
        lobby::remove_player(&mut self.state, &self.broker, &msg.player);
    }
}

impl Handler<ResetGame> for GameServer {
    type Result = ();

    fn handle(&mut self, _: ResetGame, _: &mut Context<Self>) -> Self::Result {
        info!("[GameServer] Administrative reset");
        self.state.reset();
    }
}

impl Handler<GetSnapshot> for GameServer {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, msg: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot_for(&msg.player))
    }
}
