//! Gateway client seam.
//!
//! The orchestrator talks to the gateway only through `GatewayClient`. The
//! production implementation wraps a Serenity `Client`: login validates the token
//! over REST and then starts the shard connection in its own task (its failure
//! is fed back to the orchestrator as a lost connection), presence
//! updates go through the shard manager, and message sends are spawned so the
//! caller never waits on them.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{ActivityData, ChannelId, Client, CreateMessage, ShardManager};
use serenity::async_trait;
use serenity::http::Http;
use tokio::sync::{mpsc::UnboundedSender, Mutex};

use crate::{
    bot::report::{error_chain, ErrorReporter},
    error::gateway::GatewayError,
    model::{
        event::{GatewayEvent, Presence},
        session::{LoginSession, SessionIdentity},
    },
};

/// Operations the orchestrator performs on the gateway.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Authenticates and opens the session for the given shard.
    async fn login(&self, identity: &SessionIdentity) -> Result<LoginSession, GatewayError>;

    /// Broadcasts a presence update. Fire-and-forget.
    fn set_presence(&self, presence: Presence);

    /// Sends a text message to a channel. Fire-and-forget.
    fn send_message(&self, channel_id: u64, text: String);

    /// Closes every shard connection.
    async fn shutdown(&self);
}

/// Serenity-backed gateway client.
pub struct SerenityGateway {
    /// Taken by the first successful `login`
    client: Mutex<Option<Client>>,
    http: Arc<Http>,
    shard_manager: Arc<ShardManager>,
    reporter: Arc<dyn ErrorReporter>,
    /// Same channel the event bridge feeds
    events: UnboundedSender<GatewayEvent>,
}

impl SerenityGateway {
    /// Wraps a built but not yet started Serenity client.
    ///
    /// # Arguments
    /// - `client` - Client configured with the bot token and event handler
    /// - `reporter` - Receives failures of spawned sends
    /// - `events` - Orchestrator event channel, told when the shard connection fails
    pub fn new(
        client: Client,
        reporter: Arc<dyn ErrorReporter>,
        events: UnboundedSender<GatewayEvent>,
    ) -> Self {
        let http = client.http.clone();
        let shard_manager = client.shard_manager.clone();

        Self {
            client: Mutex::new(Some(client)),
            http,
            shard_manager,
            reporter,
            events,
        }
    }
}

#[async_trait]
impl GatewayClient for SerenityGateway {
    async fn login(&self, identity: &SessionIdentity) -> Result<LoginSession, GatewayError> {
        // REST call fails fast on a bad token, before any shard is spawned
        let user = self.http.get_current_user().await?;

        if !user.bot {
            return Err(GatewayError::Rejected(format!(
                "account {} is not a bot account",
                user.name
            )));
        }

        let mut client = self
            .client
            .lock()
            .await
            .take()
            .ok_or(GatewayError::AlreadyConnected)?;

        let shard_id = identity.shard_id;
        let shard_count = identity.shard_count;
        let reporter = self.reporter.clone();
        let events = self.events.clone();

        // Returns Ok only after a requested shutdown
        tokio::spawn(async move {
            if let Err(e) = client.start_shard(shard_id, shard_count).await {
                let error = GatewayError::from(e);

                if events
                    .send(GatewayEvent::ConnectionLost(error_chain(&error)))
                    .is_err()
                {
                    reporter.report(&error);
                }
            }
        });

        Ok(LoginSession {
            user_id: user.id.get(),
            user_name: user.name.clone(),
        })
    }

    fn set_presence(&self, presence: Presence) {
        let shard_manager = self.shard_manager.clone();

        tokio::spawn(async move {
            let runners = shard_manager.runners.lock().await;

            for (shard_id, runner) in runners.iter() {
                tracing::debug!("Setting presence on shard {}", shard_id);
                runner.runner_tx.set_presence(
                    Some(ActivityData::playing(presence.activity.clone())),
                    presence.status,
                );
            }
        });
    }

    fn send_message(&self, channel_id: u64, text: String) {
        let http = self.http.clone();
        let reporter = self.reporter.clone();

        tokio::spawn(async move {
            let channel_id = ChannelId::new(channel_id);
            let message = CreateMessage::new().content(text);

            if let Err(e) = channel_id.send_message(&http, message).await {
                tracing::warn!("Failed to send message to channel {}", channel_id);
                reporter.report(&GatewayError::from(e));
            }
        });
    }

    async fn shutdown(&self) {
        self.shard_manager.shutdown_all().await;
    }
}
