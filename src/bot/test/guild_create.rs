use super::*;
use crate::model::markdown::MarkdownSettings;

/// Tests that unavailable guilds are ignored.
///
/// Expected: no sends, no state change
#[tokio::test]
async fn unavailable_guild_sends_nothing() {
    let mut bot = TestBot::serving("/").await;
    let calls_before = bot.gateway.calls();

    bot.orchestrator.on_guild_create(guild_join(false, Some(42)));

    assert_eq!(bot.gateway.calls(), calls_before);
    assert!(bot.orchestrator.is_ready());
}

/// Tests the welcome broadcast for an available guild.
///
/// Expected: exactly one send to the default channel with the bold upper-cased
/// name and the inline-code help command
#[tokio::test]
async fn available_guild_gets_one_welcome() {
    let mut bot = TestBot::serving("/").await;

    bot.orchestrator.on_guild_create(guild_join(true, Some(42)));

    assert_eq!(
        bot.gateway.sends(),
        vec![(
            42,
            "**HERALD ready!** Type `/help` for help".to_string()
        )]
    );
}

/// Tests that the welcome uses the raw prefix, not the escaped one.
///
/// Expected: "!help?help" appears literally inside the code markers
#[tokio::test]
async fn welcome_displays_raw_prefix() {
    let mut bot = TestBot::serving("!help?").await;

    bot.orchestrator.on_guild_create(guild_join(true, Some(42)));

    let sends = bot.gateway.sends();
    assert_eq!(sends.len(), 1);
    assert!(sends[0].1.contains("HERALD"));
    assert!(sends[0].1.contains("`!help?help`"));
    assert!(!sends[0].1.contains("\\?"));
}

/// Tests that guild joins are not gated by readiness.
///
/// Verifies that a join before ready still sends, using the account name learned
/// at login.
///
/// Expected: one send naming the login account
#[tokio::test]
async fn guild_join_before_ready_still_welcomes() {
    let mut bot = TestBot::new("/");
    bot.orchestrator.start().await.unwrap();

    bot.orchestrator.on_guild_create(guild_join(true, Some(42)));

    assert_eq!(
        bot.gateway.sends(),
        vec![(
            42,
            "**HERALD ready!** Type `/help` for help".to_string()
        )]
    );
    assert!(!bot.orchestrator.is_ready());
}

#[test]
fn welcome_falls_back_to_generic_name() {
    let bot = TestBot::new("/");

    assert_eq!(
        bot.orchestrator.welcome_message(),
        "**BOT ready!** Type `/help` for help"
    );
}

#[tokio::test]
async fn guild_without_default_channel_sends_nothing() {
    let mut bot = TestBot::serving("/").await;

    bot.orchestrator.on_guild_create(guild_join(true, None));

    assert!(bot.gateway.sends().is_empty());
}

/// Tests that the welcome takes its markers from the markdown table.
///
/// Expected: custom bold and code markers wrap the segments
#[tokio::test]
async fn welcome_uses_configured_markers() {
    let gateway = Arc::new(RecordingGateway::default());
    let markdown = MarkdownSettings::from_json_overrides(r#"{"bold": "__", "codeLine": "``"}"#)
        .unwrap();
    let mut orchestrator = Orchestrator::new(
        Credential::new("test-token-0123456789"),
        Arc::new(RecordingReporter::default()),
        gateway.clone(),
        OrchestratorOptions {
            prefix: ".".to_string(),
            markdown,
            router: Some(Box::new(RecordingRouter::default())),
            ..OrchestratorOptions::default()
        },
    )
    .unwrap();
    orchestrator.start().await.unwrap();
    orchestrator.on_ready(ready_info());

    orchestrator.on_guild_create(guild_join(true, Some(42)));

    assert_eq!(
        gateway.sends(),
        vec![(42, "__HERALD ready!__ Type ``.help`` for help".to_string())]
    );
}
