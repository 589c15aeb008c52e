//! Guild event conversion.
//!
//! `guild_create` fires on startup for each guild the bot is already in, when the
//! bot joins a new guild, and when a guild comes back after an outage. All of these
//! are treated as an available join. A `guild_delete` flagged `unavailable` means
//! the guild went into an outage; it is forwarded as an unavailable join so the
//! orchestrator's availability gate sees it.

use serenity::all::{ChannelType, Guild, UnavailableGuild};

use crate::model::event::GuildJoin;

pub fn to_guild_join(guild: &Guild) -> GuildJoin {
    GuildJoin {
        guild_id: guild.id.get(),
        name: guild.name.clone(),
        available: true,
        default_channel: default_channel(guild),
    }
}

/// Returns `None` when the bot actually left the guild rather than losing it to an outage.
pub fn to_unavailable_join(
    incomplete: &UnavailableGuild,
    full: Option<&Guild>,
) -> Option<GuildJoin> {
    if !incomplete.unavailable {
        return None;
    }

    Some(GuildJoin {
        guild_id: incomplete.id.get(),
        name: full.map(|guild| guild.name.clone()).unwrap_or_default(),
        available: false,
        default_channel: None,
    })
}

/// The guild's system channel, else its top-most text channel.
fn default_channel(guild: &Guild) -> Option<u64> {
    if let Some(channel_id) = guild.system_channel_id {
        return Some(channel_id.get());
    }

    guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .min_by_key(|channel| (channel.position, channel.id))
        .map(|channel| channel.id.get())
}
