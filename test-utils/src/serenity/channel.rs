use serenity::all::GuildChannel;

/// Creates a guild text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `position` - Sort position in the channel list, lower is higher up
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": 0,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "parent_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
