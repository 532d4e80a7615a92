//! HTTP route handlers.
//!
//! The mutating endpoints are a thin façade over the command channel: they
//! publish to the matching queue and answer `{"ok":true}` immediately; the
//! actual mutation happens later inside the matching consumer. Heartbeat,
//! leave, and reset go straight to the game server actor (heartbeats are
//! timing-sensitive, the others administrative), and the state endpoint is
//! the synchronous read façade.

use actix_web::{error, web, Error, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::channel::broker::Queue;
use crate::channel::messages::{ActionCommand, ChatCommand, MoveCommand};
use crate::game::types::Direction;
use crate::server::messages::{GetSnapshot, Heartbeat, LeaveGame, ResetGame};
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct JoinRequest {
    name: Option<String>,
}

pub async fn join(data: web::Data<AppState>, body: web::Json<JoinRequest>) -> HttpResponse {
    let player = body.name.clone().unwrap_or_else(|| "Anonymous".to_string());
    data.broker
        .publish(Queue::Actions, &ActionCommand::Join { player });
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    player: String,
    direction: Direction,
}

pub async fn make_move(data: web::Data<AppState>, body: web::Json<MoveRequest>) -> HttpResponse {
    data.broker.publish(
        Queue::Moves,
        &MoveCommand::Move {
            player: body.player.clone(),
            direction: body.direction,
        },
    );
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[derive(Deserialize)]
pub struct PlaceBombRequest {
    player: String,
    x: i32,
    y: i32,
}

pub async fn place_bomb(
    data: web::Data<AppState>,
    body: web::Json<PlaceBombRequest>,
) -> HttpResponse {
    data.broker.publish(
        Queue::Moves,
        &MoveCommand::PlaceBomb {
            player: body.player.clone(),
            x: body.x,
            y: body.y,
        },
    );
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    player: String,
    message: String,
}

pub async fn chat(data: web::Data<AppState>, body: web::Json<ChatRequest>) -> HttpResponse {
    data.broker.publish(
        Queue::Chat,
        &ChatCommand {
            player: body.player.clone(),
            message: body.message.clone(),
        },
    );
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[derive(Deserialize)]
pub struct StateQuery {
    #[serde(default)]
    player: String,
}

pub async fn state(
    data: web::Data<AppState>,
    query: web::Query<StateQuery>,
) -> Result<HttpResponse, Error> {
    let snapshot = data
        .game
        .send(GetSnapshot {
            player: query.player.clone(),
        })
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[derive(Deserialize)]
pub struct PlayerRequest {
    player: String,
}

pub async fn heartbeat(data: web::Data<AppState>, body: web::Json<PlayerRequest>) -> HttpResponse {
    data.game.do_send(Heartbeat {
        player: body.player.clone(),
    });
    HttpResponse::Ok().json(json!({"ok": true}))
}

pub async fn leave(data: web::Data<AppState>, body: web::Json<PlayerRequest>) -> HttpResponse {
    data.game.do_send(LeaveGame {
        player: body.player.clone(),
    });
    HttpResponse::Ok().json(json!({"ok": true}))
}

pub async fn reset(data: web::Data<AppState>) -> HttpResponse {
    data.game.do_send(ResetGame);
    HttpResponse::Ok().json(json!({"ok": true}))
}
