//! Default command router.
//!
//! Recognizes the verb directly after the command prefix and answers the two
//! built-in commands. Everything else is ignored.

use std::sync::Arc;

use dioxus_logger::tracing;
use regex::Regex;
use serenity::async_trait;

use crate::{
    bot::gateway::GatewayClient,
    command::{CommandRouter, RouterContext},
    model::{
        event::InboundMessage,
        markdown::{BOLD, CODE_LINE, LINE_END},
        session::RoutingConfig,
    },
};

pub struct PrefixRouter {
    /// `^<escaped prefix>(\S+)`
    pattern: Regex,
    gateway: Arc<dyn GatewayClient>,
}

impl PrefixRouter {
    /// Compiles the command pattern for the configured prefix.
    ///
    /// # Arguments
    /// - `routing` - Prefix configuration; only the escaped form is used for matching
    /// - `gateway` - Client used to send replies
    ///
    /// # Returns
    /// - `Ok(PrefixRouter)` - Router ready to handle messages
    /// - `Err(regex::Error)` - Pattern failed to compile
    pub fn new(
        routing: &RoutingConfig,
        gateway: Arc<dyn GatewayClient>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: routing.pattern(r"(\S+)")?,
            gateway,
        })
    }

    /// Returns the command verb of `content`, if it starts with the prefix.
    pub fn verb<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(content)
            .and_then(|captures| captures.get(1))
            .map(|verb| verb.as_str())
    }

    fn help_text(context: &RouterContext) -> String {
        let markdown = &context.markdown;
        let prefix = context.routing.prefix();
        let line_end = markdown.get(LINE_END);

        format!(
            "{title}{line_end}{help} show this message\
             {line_end}{ping} check that the bot is responding",
            title = markdown.wrap(BOLD, &format!("{} commands", context.self_identity.name)),
            help = markdown.wrap(CODE_LINE, &format!("{prefix}help")),
            ping = markdown.wrap(CODE_LINE, &format!("{prefix}ping")),
        )
    }
}

#[async_trait]
impl CommandRouter for PrefixRouter {
    async fn handle(&self, context: &RouterContext, message: InboundMessage) {
        match self.verb(&message.content) {
            Some("help") => self
                .gateway
                .send_message(message.channel_id, Self::help_text(context)),
            Some("ping") => self
                .gateway
                .send_message(message.channel_id, "pong".to_string()),
            Some(verb) => tracing::debug!("Ignoring unknown command '{}'", verb),
            None => {}
        }
    }
}
