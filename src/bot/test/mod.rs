//! Recording collaborators and helpers for orchestrator tests.

use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use serenity::async_trait;

use crate::{
    bot::{
        gateway::GatewayClient,
        orchestrator::{Orchestrator, OrchestratorOptions},
        report::{error_chain, ErrorReporter},
    },
    command::{CommandRouter, RouterContext},
    error::gateway::GatewayError,
    model::{
        event::{GuildJoin, InboundMessage, Presence, ReadyInfo},
        session::{Credential, LoginSession, SessionIdentity},
    },
};

mod guild_create;
mod start;

pub const SELF_ID: u64 = 1000;
pub const SELF_NAME: &str = "Herald";
pub const OTHER_USER_ID: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Login { shard_id: u32, shard_count: u32 },
    Presence(Presence),
    Send { channel_id: u64, text: String },
    Shutdown,
}

/// Gateway that records every call in order.
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
    login_error: Mutex<Option<GatewayError>>,
}

impl RecordingGateway {
    /// A gateway whose login fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Mutex::default(),
            login_error: Mutex::new(Some(GatewayError::Rejected(reason.to_string()))),
        }
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sends(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Send { channel_id, text } => Some((channel_id, text)),
                _ => None,
            })
            .collect()
    }

    pub fn presences(&self) -> Vec<Presence> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Presence(presence) => Some(presence),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GatewayClient for RecordingGateway {
    async fn login(&self, identity: &SessionIdentity) -> Result<LoginSession, GatewayError> {
        self.record(GatewayCall::Login {
            shard_id: identity.shard_id,
            shard_count: identity.shard_count,
        });

        match self.login_error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(LoginSession {
                user_id: SELF_ID,
                user_name: SELF_NAME.to_string(),
            }),
        }
    }

    fn set_presence(&self, presence: Presence) {
        self.record(GatewayCall::Presence(presence));
    }

    fn send_message(&self, channel_id: u64, text: String) {
        self.record(GatewayCall::Send { channel_id, text });
    }

    async fn shutdown(&self) {
        self.record(GatewayCall::Shutdown);
    }
}

/// Router that keeps every message it is handed.
#[derive(Clone, Default)]
pub struct RecordingRouter {
    handled: Arc<Mutex<Vec<InboundMessage>>>,
    contexts: Arc<Mutex<Vec<RouterContext>>>,
}

impl RecordingRouter {
    pub fn handled(&self) -> Vec<InboundMessage> {
        self.handled.lock().unwrap().clone()
    }

    pub fn contexts(&self) -> Vec<RouterContext> {
        self.contexts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRouter for RecordingRouter {
    async fn handle(&self, context: &RouterContext, message: InboundMessage) {
        self.contexts.lock().unwrap().push(context.clone());
        self.handled.lock().unwrap().push(message);
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &(dyn Error + 'static)) {
        self.reports.lock().unwrap().push(error_chain(error));
    }
}

/// Orchestrator wired to recording collaborators.
pub struct TestBot {
    pub orchestrator: Orchestrator,
    pub gateway: Arc<RecordingGateway>,
    pub router: RecordingRouter,
    pub reporter: Arc<RecordingReporter>,
}

impl TestBot {
    pub fn new(prefix: &str) -> Self {
        Self::with_gateway(prefix, RecordingGateway::default())
    }

    /// Logged in and past the ready signal.
    pub async fn serving(prefix: &str) -> Self {
        let mut bot = Self::new(prefix);
        bot.orchestrator.start().await.unwrap();
        bot.orchestrator.on_ready(ready_info());

        bot
    }

    pub fn with_gateway(prefix: &str, gateway: RecordingGateway) -> Self {
        let gateway = Arc::new(gateway);
        let router = RecordingRouter::default();
        let reporter = Arc::new(RecordingReporter::default());

        let orchestrator = Orchestrator::new(
            Credential::new("test-token-0123456789"),
            reporter.clone(),
            gateway.clone(),
            OrchestratorOptions {
                prefix: prefix.to_string(),
                owner: Some(OTHER_USER_ID),
                router: Some(Box::new(router.clone())),
                ..OrchestratorOptions::default()
            },
        )
        .unwrap();

        Self {
            orchestrator,
            gateway,
            router,
            reporter,
        }
    }
}

pub fn ready_info() -> ReadyInfo {
    ReadyInfo {
        user_id: SELF_ID,
        user_name: SELF_NAME.to_string(),
        session_id: "session-1".to_string(),
        guild_count: 2,
    }
}

pub fn message_from(author_id: u64, content: &str) -> InboundMessage {
    InboundMessage {
        id: 1,
        author_id,
        guild_id: Some(300),
        channel_id: 400,
        content: content.to_string(),
    }
}

pub fn guild_join(available: bool, default_channel: Option<u64>) -> GuildJoin {
    GuildJoin {
        guild_id: 300,
        name: "Test Guild".to_string(),
        available,
        default_channel,
    }
}
