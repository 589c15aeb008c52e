//! Command subsystem seam.
//!
//! The orchestrator hands every admitted message to a `CommandRouter` along with a
//! `RouterContext` carrying the formatting table and identity data the router
//! needs to build replies. Parsing and executing commands is entirely the
//! router's concern.

pub mod prefix;

use std::sync::Arc;

use serenity::async_trait;

use crate::model::{
    event::InboundMessage,
    markdown::MarkdownSettings,
    session::{RoutingConfig, SelfIdentity},
};

pub use prefix::PrefixRouter;

/// Identity and formatting data shared with the command router.
#[derive(Debug, Clone)]
pub struct RouterContext {
    pub routing: Arc<RoutingConfig>,
    pub markdown: Arc<MarkdownSettings>,
    pub owner: Option<u64>,
    pub self_identity: SelfIdentity,
    pub shard_id: u32,
}

/// Receives messages that passed admission.
#[async_trait]
pub trait CommandRouter: Send + Sync {
    async fn handle(&self, context: &RouterContext, message: InboundMessage);
}
