//! Command channel layer.
//!
//! The façade never mutates game state directly: every mutating request is
//! published here and applied later by the matching consumer. This module
//! holds the in-process broker, the per-queue wire shapes, and the consumer
//! loops.

pub mod broker;
pub mod consumer;
pub mod messages;
