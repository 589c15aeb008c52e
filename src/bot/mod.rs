//! Discord bot integration.
//!
//! The `Orchestrator` owns the gateway session and the admission rules. It reaches
//! the gateway through the `GatewayClient` trait and receives events from the
//! Serenity `Handler` over a single channel.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild create and delete events
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Receive messages to route
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod gateway;
pub mod handler;
pub mod orchestrator;
pub mod report;

#[cfg(test)]
pub mod test;
