use serenity::all::Message;

/// Creates a plain text message as delivered by the gateway.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild of the channel, `None` for a direct message
/// - `author_id` - User who sent the message
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author_id: u64,
    content: &str,
) -> Message {
    let mut payload = serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": "tester",
            "discriminator": "0001",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    });

    // Direct messages carry no guild_id key at all
    if let Some(guild_id) = guild_id {
        payload["guild_id"] = serde_json::Value::String(guild_id.to_string());
    }

    serde_json::from_value(payload).expect("Failed to create test message - invalid JSON structure")
}
