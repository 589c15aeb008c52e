use super::*;
use crate::{
    bot::orchestrator::FAILURE_EXIT_CODE,
    error::{AppError, LifecycleError},
    model::session::LifecycleState,
};

/// Tests a successful login.
///
/// Verifies that login is requested once with the configured shard and that
/// success alone does not make the session ready.
///
/// Expected: Ok, state Authenticating, not ready, no presence update
#[tokio::test]
async fn login_success_waits_for_ready() {
    let mut bot = TestBot::new("/");

    let result = bot.orchestrator.start().await;

    assert!(result.is_ok());
    assert_eq!(bot.orchestrator.state(), LifecycleState::Authenticating);
    assert!(!bot.orchestrator.is_ready());
    assert_eq!(
        bot.gateway.calls(),
        vec![GatewayCall::Login {
            shard_id: 0,
            shard_count: 1
        }]
    );
    assert!(bot.reporter.reports().is_empty());
}

/// Tests that a failed login is terminal.
///
/// Verifies that the orchestrator moves to Terminated with exit status 1, reports
/// the failure, and never pushes presence or becomes ready.
///
/// Expected: Err(Login), Terminated { exit_code: 1 }, one report
#[tokio::test]
async fn login_failure_terminates_with_status_one() {
    let mut bot = TestBot::with_gateway("/", RecordingGateway::failing("401 Unauthorized"));

    let result = bot.orchestrator.start().await;

    assert!(matches!(result, Err(AppError::Login(_))));
    assert_eq!(
        bot.orchestrator.state(),
        LifecycleState::Terminated { exit_code: 1 }
    );
    assert_eq!(FAILURE_EXIT_CODE, 1);
    assert!(!bot.orchestrator.is_ready());
    assert!(bot.gateway.presences().is_empty());
    assert_eq!(
        bot.reporter.reports(),
        vec!["Failed to log in to the gateway: Gateway rejected the session: 401 Unauthorized"]
    );
}

/// Tests that a ready signal arriving after a failed login is ignored.
///
/// Expected: still Terminated, no presence, not ready
#[tokio::test]
async fn ready_after_failed_login_is_ignored() {
    let mut bot = TestBot::with_gateway("/", RecordingGateway::failing("401 Unauthorized"));
    let _ = bot.orchestrator.start().await;

    bot.orchestrator.on_ready(ready_info());

    assert_eq!(
        bot.orchestrator.state(),
        LifecycleState::Terminated { exit_code: 1 }
    );
    assert!(!bot.orchestrator.is_ready());
    assert!(bot.gateway.presences().is_empty());
}

/// Tests that login is attempted at most once.
///
/// Expected: second start returns AlreadyStarted without contacting the gateway
#[tokio::test]
async fn start_twice_is_rejected() {
    let mut bot = TestBot::new("/");
    bot.orchestrator.start().await.unwrap();

    let result = bot.orchestrator.start().await;

    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::AlreadyStarted {
            state: LifecycleState::Authenticating
        }))
    ));
    assert_eq!(bot.gateway.calls().len(), 1);
}
