use dioxus_logger::tracing::{self, Level};
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, model::session::Credential};

/// Initializes the global log subscriber.
///
/// # Arguments
/// - `level` - Most verbose level emitted, see `Config::log_level`
pub fn init_logger(level: Level) {
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Builds the Serenity client without connecting.
///
/// The token is only checked for format here; authentication happens when the
/// orchestrator logs in.
///
/// # Arguments
/// - `credential` - Bot token, handed to the client once here
/// - `handler` - Event bridge feeding the orchestrator
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Token is malformed or the client could not be built
pub async fn build_client(credential: &Credential, handler: Handler) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(credential.expose(), intents)
        .event_handler(handler)
        .await?;

    tracing::debug!("Built Discord client with token {}", credential);

    Ok(client)
}
