//! Serenity event bridge.
//!
//! Serenity dispatches every event on its own task. `Handler` converts the events
//! the orchestrator cares about into `GatewayEvent`s and pushes them onto one
//! channel, so a single consumer sees them sequentially in delivery order.

use dioxus_logger::tracing;
use serenity::all::{Context, EventHandler, Guild, Message, Ready, UnavailableGuild};
use serenity::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::model::event::GatewayEvent;

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    events: UnboundedSender<GatewayEvent>,
}

impl Handler {
    pub fn new(events: UnboundedSender<GatewayEvent>) -> Self {
        Self { events }
    }

    fn forward(&self, event: GatewayEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Orchestrator has stopped, dropping gateway event");
        }
    }

    fn handle_ready(&self, ready: &Ready) {
        self.forward(GatewayEvent::Ready(ready::to_ready_info(ready)));
    }

    fn handle_guild_create(&self, guild: &Guild) {
        self.forward(GatewayEvent::GuildCreate(guild::to_guild_join(guild)));
    }

    fn handle_guild_delete(&self, incomplete: &UnavailableGuild, full: Option<&Guild>) {
        if let Some(join) = guild::to_unavailable_join(incomplete, full) {
            self.forward(GatewayEvent::GuildCreate(join));
        }
    }

    fn handle_message(&self, message: Message) {
        self.forward(GatewayEvent::Message(message::to_inbound_message(message)));
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.handle_ready(&ready);
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        self.handle_guild_create(&guild);
    }

    /// Called when a guild is left or becomes unavailable during an outage
    async fn guild_delete(&self, _ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        self.handle_guild_delete(&incomplete, full.as_ref());
    }

    /// Called when a message is sent in a channel
    async fn message(&self, _ctx: Context, message: Message) {
        self.handle_message(message);
    }
}
