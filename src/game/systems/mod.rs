pub mod items;
pub mod liveness;
pub mod lobby;
pub mod movement;
pub mod setup;
pub mod turns;
