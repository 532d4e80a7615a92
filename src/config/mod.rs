/// Main configuration module.
///
/// Re-exports submodules for game and liveness configuration.
pub mod game;
pub mod liveness;
