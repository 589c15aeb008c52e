//! Heraldbot Test Utils
//!
//! Shared fixtures for unit tests of the Discord event bridge. Serenity's model
//! types cannot be built with struct literals, so every factory here deserializes
//! a JSON payload shaped like the one Discord's gateway sends.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_message};
//!
//! let guild = create_test_guild(123456789, "Test Guild", Some(42));
//! let message = create_test_message(1, 42, Some(123456789), 7, "/help");
//! ```

pub mod serenity;
