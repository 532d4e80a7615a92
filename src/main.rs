//! Main entry point for the backend server.
//!
//! Initializes the actor system, wires the command broker to its five
//! consumers, and launches the HTTP server that fronts the game.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use channel::broker::Broker;
use server::game_server::GameServer;

pub mod channel;
pub mod config;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // The broker and its five per-category queues.
    let (broker, receivers) = Broker::channel();

    // Start the GameServer actor (sole owner of the game state; also runs
    // the liveness sweeper).
    let game = GameServer::new(broker.clone()).start();

    // One consumer loop per queue, all funneling into the actor mailbox.
    channel::consumer::spawn_consumers(receivers, game.clone());

    // Shared application state for the HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(broker, game));

    info!("Listening on http://127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(server::router::config)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
