use thiserror::Error;

/// Failures reported by the gateway client.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The gateway refused the session for a reason not covered by Serenity's errors.
    #[error("Gateway rejected the session: {0}")]
    Rejected(String),

    /// The shard connection ended, or the event stream closed, without a requested shutdown.
    #[error("Gateway connection lost: {0}")]
    ConnectionLost(String),

    /// `login` was called on a client whose shard connection is already running.
    #[error("Gateway session has already been started")]
    AlreadyConnected,
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        GatewayError::DiscordErr(Box::new(err))
    }
}
