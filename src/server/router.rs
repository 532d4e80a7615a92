//! HTTP routing configuration.
//!
//! Mutating endpoints publish to the command channel; the state endpoint
//! reads a snapshot from the game server actor.

use actix_web::web;

use crate::server::routes;

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/join").route(web::post().to(routes::join)))
        .service(web::resource("/api/move").route(web::post().to(routes::make_move)))
        .service(web::resource("/api/place_bomb").route(web::post().to(routes::place_bomb)))
        .service(web::resource("/api/chat").route(web::post().to(routes::chat)))
        .service(web::resource("/api/state").route(web::get().to(routes::state)))
        .service(web::resource("/api/heartbeat").route(web::post().to(routes::heartbeat)))
        .service(web::resource("/api/leave").route(web::post().to(routes::leave)))
        .service(web::resource("/api/reset").route(web::post().to(routes::reset)));
}
