//! Gateway events as seen by the orchestrator.
//!
//! The event bridge converts Serenity payloads into these types so the
//! orchestrator never depends on the shape of Serenity's models.

use serenity::all::OnlineStatus;

/// Payload of the ready signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyInfo {
    pub user_id: u64,
    pub user_name: String,
    pub session_id: String,
    pub guild_count: usize,
}

/// A message delivered by the gateway. Read-only to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub id: u64,
    pub author_id: u64,
    /// `None` for direct messages
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub content: String,
}

/// The bot was added to, or reconnected into, a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildJoin {
    pub guild_id: u64,
    pub name: String,
    /// `false` when the guild is in an outage and carries no usable data
    pub available: bool,
    /// Channel that receives the welcome broadcast
    pub default_channel: Option<u64>,
}

/// Events consumed by the orchestrator, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    Ready(ReadyInfo),
    Message(InboundMessage),
    GuildCreate(GuildJoin),
    /// The shard connection ended with an error; carries the flattened error chain
    ConnectionLost(String),
    /// The process was asked to stop
    ShutdownRequested,
}

/// Outbound presence update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    pub status: OnlineStatus,
    /// Shown as the bot's "playing" activity
    pub activity: String,
}
