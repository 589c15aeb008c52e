//! Connection-lifecycle orchestrator.
//!
//! Owns the single gateway session and decides, for every inbound event, whether
//! it is forwarded and to what. The lifecycle is
//! `Constructed → Authenticating → Serving`. Login or connection failure moves
//! to `Terminated` with status 1, a requested shutdown with status 0.
//!
//! Handlers are only ever called from one task (`run` consumes a single event
//! channel), so the readiness flag and self identity are plain fields.

use std::sync::Arc;

use dioxus_logger::tracing::{self, Instrument, Span};
use serenity::all::OnlineStatus;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    bot::{gateway::GatewayClient, report::ErrorReporter},
    command::{CommandRouter, PrefixRouter, RouterContext},
    error::{config::ConfigError, gateway::GatewayError, AppError, LifecycleError},
    model::{
        event::{GatewayEvent, GuildJoin, InboundMessage, Presence, ReadyInfo},
        markdown::{MarkdownSettings, BOLD, CODE_LINE},
        session::{Credential, LifecycleState, RoutingConfig, SelfIdentity, SessionIdentity},
    },
};

/// Display name used in the welcome broadcast before any account name is known.
const FALLBACK_DISPLAY_NAME: &str = "bot";

/// Exit status of the process after a failed login or a lost connection.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Exit status of the process after a requested shutdown.
pub const SHUTDOWN_EXIT_CODE: i32 = 0;

/// Optional construction parameters.
pub struct OrchestratorOptions {
    pub shard_id: u32,
    pub shard_count: u32,
    pub prefix: String,
    pub markdown: MarkdownSettings,
    /// Span every handler runs in. Defaults to an `orchestrator` span carrying the shard.
    pub logger: Option<Span>,
    pub owner: Option<u64>,
    /// Defaults to a `PrefixRouter` sending through the same gateway.
    pub router: Option<Box<dyn CommandRouter>>,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            shard_id: 0,
            shard_count: 1,
            prefix: "/".to_string(),
            markdown: MarkdownSettings::default(),
            logger: None,
            owner: None,
            router: None,
        }
    }
}

pub struct Orchestrator {
    identity: SessionIdentity,
    routing: Arc<RoutingConfig>,
    markdown: Arc<MarkdownSettings>,
    owner: Option<u64>,

    gateway: Arc<dyn GatewayClient>,
    router: Box<dyn CommandRouter>,
    reporter: Arc<dyn ErrorReporter>,
    span: Span,

    state: LifecycleState,
    ready: bool,
    self_identity: Option<SelfIdentity>,
    /// Account name from login, used for display until ready arrives
    account_name: Option<String>,
}

impl Orchestrator {
    /// Creates the orchestrator. Performs no network activity.
    ///
    /// Derives the escaped prefix, validates the shard placement and builds the
    /// default command router when none is supplied.
    ///
    /// # Arguments
    /// - `credential` - Bot token for the gateway session
    /// - `reporter` - Sink for errors no caller can handle
    /// - `gateway` - Client the session runs on
    /// - `options` - Shard placement, prefix, markdown table, logger, owner and router
    ///
    /// # Returns
    /// - `Ok(Orchestrator)` - In state `Constructed`, not ready
    /// - `Err(ConfigError::InvalidShard)` - `shard_count` is 0 or `shard_id` is out of range
    /// - `Err(ConfigError::InvalidPrefix)` - Default router pattern failed to compile
    pub fn new(
        credential: Credential,
        reporter: Arc<dyn ErrorReporter>,
        gateway: Arc<dyn GatewayClient>,
        options: OrchestratorOptions,
    ) -> Result<Self, ConfigError> {
        let OrchestratorOptions {
            shard_id,
            shard_count,
            prefix,
            markdown,
            logger,
            owner,
            router,
        } = options;

        if shard_count == 0 || shard_id >= shard_count {
            return Err(ConfigError::InvalidShard {
                shard_id,
                shard_count,
            });
        }

        let routing = RoutingConfig::new(prefix);

        let router: Box<dyn CommandRouter> = match router {
            Some(router) => router,
            None => Box::new(PrefixRouter::new(&routing, gateway.clone())?),
        };

        let span = logger
            .unwrap_or_else(|| tracing::info_span!("orchestrator", shard_id, shard_count));

        Ok(Self {
            identity: SessionIdentity {
                credential,
                shard_id,
                shard_count,
            },
            routing: Arc::new(routing),
            markdown: Arc::new(markdown),
            owner,
            gateway,
            router,
            reporter,
            span,
            state: LifecycleState::Constructed,
            ready: false,
            self_identity: None,
            account_name: None,
        })
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn self_identity(&self) -> Option<&SelfIdentity> {
        self.self_identity.as_ref()
    }

    pub fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    /// Authenticates against the gateway.
    ///
    /// Success only logs the session; readiness is driven by the ready event. A
    /// failure is unrecoverable: it is logged as fatal, reported, and moves the
    /// orchestrator to `Terminated` with exit status 1. No retry is attempted.
    ///
    /// # Returns
    /// - `Ok(())` - Logged in, now `Authenticating` until ready arrives
    /// - `Err(AppError::Login)` - Login failed, now `Terminated`
    /// - `Err(AppError::LifecycleErr)` - Not in `Constructed`; the gateway was not contacted
    pub async fn start(&mut self) -> Result<(), AppError> {
        if self.state != LifecycleState::Constructed {
            return Err(LifecycleError::AlreadyStarted { state: self.state }.into());
        }

        self.state = LifecycleState::Authenticating;

        let span = self.span.clone();
        let result = self
            .gateway
            .login(&self.identity)
            .instrument(span.clone())
            .await;
        let _entered = span.enter();

        match result {
            Ok(session) => {
                tracing::debug!(
                    user_id = session.user_id,
                    token = %self.identity.credential,
                    "Logged in as {}",
                    session.user_name
                );
                self.account_name = Some(session.user_name);

                Ok(())
            }
            Err(e) => {
                tracing::error!(fatal = true, "Failed to log in to the gateway: {}", e);

                let error = AppError::Login(e);
                self.reporter.report(&error);
                self.state = LifecycleState::Terminated {
                    exit_code: FAILURE_EXIT_CODE,
                };

                Err(error)
            }
        }
    }

    /// Handles the ready signal.
    ///
    /// Records the bot's own identity, pushes exactly one presence update and then
    /// flips the readiness flag. A repeated ready (reconnect) refreshes identity and
    /// presence while readiness stays set. Ignored before `start` and once
    /// `Terminated`.
    pub fn on_ready(&mut self, ready: ReadyInfo) {
        let span = self.span.clone();
        let _entered = span.enter();

        match self.state {
            LifecycleState::Constructed => {
                tracing::debug!("Ignoring ready signal before login");
                return;
            }
            LifecycleState::Terminated { .. } => {
                tracing::debug!("Ignoring ready signal after termination");
                return;
            }
            LifecycleState::Authenticating | LifecycleState::Serving => {}
        }

        tracing::info!(
            user_id = ready.user_id,
            session_id = %ready.session_id,
            "{} is connected to the gateway ({} guilds)",
            ready.user_name,
            ready.guild_count
        );

        self.self_identity = Some(SelfIdentity {
            id: ready.user_id,
            name: ready.user_name,
        });

        self.gateway.set_presence(Presence {
            status: OnlineStatus::Online,
            activity: format!("{}help for help", self.routing.prefix()),
        });

        if self.ready {
            tracing::debug!("Session resumed; readiness unchanged");
        }

        self.ready = true;
        self.state = LifecycleState::Serving;
    }

    /// Applies the admission rule to an inbound message and forwards it if admitted.
    ///
    /// Admitted iff the session is ready and the author is not the bot itself.
    /// Dropped messages are normal filtering, not errors.
    ///
    /// # Returns
    /// - `true` - Message was handed to the command router unmodified
    /// - `false` - Message was dropped
    pub async fn on_message(&mut self, message: InboundMessage) -> bool {
        let Some(context) = self.admit(&message) else {
            return false;
        };

        self.router
            .handle(&context, message)
            .instrument(self.span.clone())
            .await;

        true
    }

    fn admit(&self, message: &InboundMessage) -> Option<RouterContext> {
        if !self.ready {
            tracing::trace!(
                parent: &self.span,
                "Dropping message {} received before ready",
                message.id
            );
            return None;
        }

        let self_identity = self.self_identity.as_ref()?;

        if message.author_id == self_identity.id {
            return None;
        }

        Some(RouterContext {
            routing: self.routing.clone(),
            markdown: self.markdown.clone(),
            owner: self.owner,
            self_identity: self_identity.clone(),
            shard_id: self.identity.shard_id,
        })
    }

    /// Sends the welcome broadcast when the bot joins an available guild.
    ///
    /// Independent of readiness. Unavailable guilds are ignored.
    pub fn on_guild_create(&mut self, guild: GuildJoin) {
        if !guild.available {
            return;
        }

        let span = self.span.clone();
        let _entered = span.enter();

        tracing::info!("Joined guild {} ({})", guild.name, guild.guild_id);

        let Some(channel_id) = guild.default_channel else {
            tracing::info!(
                "Guild {} has no default channel, skipping welcome message",
                guild.guild_id
            );
            return;
        };

        self.gateway.send_message(channel_id, self.welcome_message());
    }

    /// `**NAME ready!** Type `<prefix>help` for help`, with markers from the markdown table.
    pub fn welcome_message(&self) -> String {
        let name = self
            .self_identity
            .as_ref()
            .map(|identity| identity.name.as_str())
            .or(self.account_name.as_deref())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
            .to_uppercase();

        format!(
            "{} Type {} for help",
            self.markdown.wrap(BOLD, &format!("{name} ready!")),
            self.markdown
                .wrap(CODE_LINE, &format!("{}help", self.routing.prefix())),
        )
    }

    /// Handles the end of the shard connection.
    ///
    /// Before ready the gateway refused the handshake, which is an authentication
    /// failure. After ready the session is gone for good. Both are fatal and move
    /// the orchestrator to `Terminated` with status 1.
    pub fn on_connection_lost(&mut self, reason: String) {
        let span = self.span.clone();
        let _entered = span.enter();

        if matches!(self.state, LifecycleState::Terminated { .. }) {
            return;
        }

        let error = GatewayError::ConnectionLost(reason);

        if self.state == LifecycleState::Serving {
            tracing::error!(fatal = true, "Lost the gateway session: {}", error);
            self.reporter.report(&error);
        } else {
            tracing::error!(fatal = true, "Failed to log in to the gateway: {}", error);
            self.reporter.report(&AppError::Login(error));
        }

        self.state = LifecycleState::Terminated {
            exit_code: FAILURE_EXIT_CODE,
        };
    }

    /// Closes every shard connection and ends the run loop with status 0.
    pub async fn on_shutdown_requested(&mut self) {
        if matches!(self.state, LifecycleState::Terminated { .. }) {
            return;
        }

        tracing::info!(parent: &self.span, "Shutdown requested, closing gateway connections");

        self.gateway
            .shutdown()
            .instrument(self.span.clone())
            .await;

        self.state = LifecycleState::Terminated {
            exit_code: SHUTDOWN_EXIT_CODE,
        };
    }

    /// Routes one event to its handler, running it to completion.
    pub async fn dispatch(&mut self, event: GatewayEvent) {
        match event {
            GatewayEvent::Ready(ready) => self.on_ready(ready),
            GatewayEvent::Message(message) => {
                self.on_message(message).await;
            }
            GatewayEvent::GuildCreate(guild) => self.on_guild_create(guild),
            GatewayEvent::ConnectionLost(reason) => self.on_connection_lost(reason),
            GatewayEvent::ShutdownRequested => self.on_shutdown_requested().await,
        }
    }

    /// Consumes events one at a time until the channel closes or the
    /// orchestrator is `Terminated`.
    ///
    /// A stream that closes after login but before ready means the connection
    /// never came up, and is handled as a lost connection.
    ///
    /// # Returns
    /// - `LifecycleState` - State when the event stream ended
    pub async fn run(&mut self, mut events: UnboundedReceiver<GatewayEvent>) -> LifecycleState {
        while !matches!(self.state, LifecycleState::Terminated { .. }) {
            let Some(event) = events.recv().await else {
                tracing::info!(parent: &self.span, "Gateway event stream closed");

                if self.state == LifecycleState::Authenticating {
                    self.on_connection_lost("event stream closed before ready".to_string());
                }
                break;
            };

            self.dispatch(event).await;
        }

        self.state
    }
}
