use serenity::all::Ready;

/// Creates the ready payload a bot account receives after identifying.
///
/// # Arguments
/// - `user_id` - Bot user ID (snowflake)
/// - `user_name` - Bot username
/// - `session_id` - Gateway session ID
/// - `guild_ids` - Guilds the bot is in, all delivered as unavailable stubs
///
/// # Panics
/// - If the JSON cannot be deserialized into a Ready (indicates invalid test data)
pub fn create_test_ready(
    user_id: u64,
    user_name: &str,
    session_id: &str,
    guild_ids: &[u64],
) -> Ready {
    let guilds: Vec<serde_json::Value> = guild_ids
        .iter()
        .map(|guild_id| {
            serde_json::json!({
                "id": guild_id.to_string(),
                "unavailable": true,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "v": 10,
        "user": {
            "id": user_id.to_string(),
            "username": user_name,
            "discriminator": "0001",
            "global_name": null,
            "avatar": null,
            "bot": true,
        },
        "guilds": guilds,
        "session_id": session_id,
        "resume_gateway_url": "wss://gateway.discord.gg",
        "shard": null,
        "application": {
            "id": user_id.to_string(),
            "flags": 0,
        },
    }))
    .expect("Failed to create test ready - invalid JSON structure")
}
