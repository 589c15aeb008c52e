use std::error::Error;

use dioxus_logger::tracing;

/// Out-of-band sink for errors that no caller can act on.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &(dyn Error + 'static));
}

/// Reports errors as `error` events with the full source chain flattened into one line.
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &(dyn Error + 'static)) {
        tracing::error!(reported = true, "{}", error_chain(error));
    }
}

/// Joins an error and all of its sources with `": "`.
pub fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{gateway::GatewayError, AppError};

    #[test]
    fn chain_includes_sources() {
        let error = AppError::Login(GatewayError::Rejected("401 Unauthorized".to_string()));

        assert_eq!(
            error_chain(&error),
            "Failed to log in to the gateway: Gateway rejected the session: 401 Unauthorized"
        );
    }
}
