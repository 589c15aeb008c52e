//! Session identity, routing configuration and lifecycle state.

use std::fmt;

use regex::Regex;

/// Bot token used to authenticate against the gateway.
///
/// `Debug` and `Display` only ever print a masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for handing to the gateway client.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First four characters followed by a fixed mask; fully masked when the
    /// token is too short to reveal anything safely.
    pub fn masked(&self) -> String {
        if self.0.chars().count() < 12 {
            return "****".to_string();
        }

        let head: String = self.0.chars().take(4).collect();
        format!("{head}****")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Credential and shard placement of the single gateway session.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub credential: Credential,
    pub shard_id: u32,
    pub shard_count: u32,
}

/// Command prefix as configured, plus its regex-escaped form.
///
/// The escaped form is derived once so any pattern built from it matches the
/// prefix text literally, whatever metacharacters the configuration contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    prefix: String,
    escaped_prefix: String,
}

impl RoutingConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let escaped_prefix = regex::escape(&prefix);

        Self {
            prefix,
            escaped_prefix,
        }
    }

    /// The prefix as supplied, used for display.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The prefix with every regex metacharacter escaped, used for matching.
    pub fn escaped_prefix(&self) -> &str {
        &self.escaped_prefix
    }

    /// Compiles a pattern anchored at the start of the text that matches the
    /// literal prefix followed by `suffix`.
    ///
    /// # Arguments
    /// - `suffix` - Regex fragment appended after the escaped prefix
    ///
    /// # Returns
    /// - `Ok(Regex)` - Compiled pattern
    /// - `Err(regex::Error)` - `suffix` is not a valid regex fragment
    pub fn pattern(&self, suffix: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^{}{}", self.escaped_prefix, suffix))
    }
}

/// The bot's own account, learned from the ready signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfIdentity {
    pub id: u64,
    pub name: String,
}

/// Success value of a gateway login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    pub user_id: u64,
    pub user_name: String,
}

/// Lifecycle of the orchestrator.
///
/// `Constructed → Authenticating → Serving`. `Terminated` is entered when
/// authentication or the connection fails (status 1) or on a requested shutdown
/// (status 0), and carries the exit status the process should end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Constructed,
    Authenticating,
    Serving,
    Terminated { exit_code: i32 },
}

impl LifecycleState {
    /// Process exit status for a run that ended in this state.
    ///
    /// Only `Terminated` carries a status; statuses outside `0..=255` map to 1.
    pub fn exit_status(&self) -> u8 {
        match self {
            LifecycleState::Terminated { exit_code } => u8::try_from(*exit_code).unwrap_or(1),
            _ => 0,
        }
    }
}
