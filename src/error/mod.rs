//! Error types for the bot.
//!
//! `AppError` is the top-level error returned to `main`. Any variant that reaches
//! `main` ends the process with exit status 1. The login failure variant is the
//! only one the orchestrator itself produces at runtime, and it is logged and
//! reported before it is returned.

pub mod config;
pub mod gateway;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, gateway::GatewayError},
    model::session::LifecycleState,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Lifecycle operation requested in a state that does not allow it.
    #[error(transparent)]
    LifecycleErr(#[from] LifecycleError),

    /// Authentication against the gateway failed.
    ///
    /// Unrecoverable. The orchestrator has already moved to `Terminated`.
    #[error("Failed to log in to the gateway")]
    Login(#[source] GatewayError),

    /// Discord API error from Serenity raised outside of login.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

impl AppError {
    /// Whether the error was already logged as fatal and reported where it happened.
    pub fn is_reported(&self) -> bool {
        matches!(self, AppError::Login(_))
    }
}

/// Boxes the error to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

#[derive(Error, Debug)]
pub enum LifecycleError {
    /// `start` was called after the session had already left `Constructed`.
    #[error("Orchestrator already started (state: {state:?})")]
    AlreadyStarted { state: LifecycleState },
}
