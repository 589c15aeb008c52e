//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON,
//! simulating what Discord's gateway would deliver, with sensible defaults for
//! every field the tests do not care about.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_test_unavailable_guild` - Create UnavailableGuild objects
//! - `channel::create_test_text_channel` - Create guild text channels
//! - `message::create_test_message` - Create Serenity Message objects
//! - `ready::create_test_ready` - Create the Ready payload of a bot session

pub mod channel;
pub mod guild;
pub mod message;
pub mod ready;

pub use channel::create_test_text_channel;
pub use guild::{create_test_guild, create_test_unavailable_guild};
pub use message::create_test_message;
pub use ready::create_test_ready;
