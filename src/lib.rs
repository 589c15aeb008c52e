//! Heraldbot
//!
//! Connection-lifecycle orchestrator for a Discord bot. The `bot` module owns the
//! gateway session and decides which inbound events reach the command router in
//! `command`.

pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod startup;
