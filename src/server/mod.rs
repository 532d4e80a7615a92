//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Application state management
//! - HTTP routing and handlers (the thin command façade)
//! - The game server actor that owns the authoritative game state

pub mod game_server;
pub mod messages;
pub mod router;
pub mod routes;
pub mod state;
