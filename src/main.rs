use std::{process::ExitCode, sync::Arc};

use dioxus_logger::tracing;
use tokio::sync::mpsc;

use heraldbot::{
    bot::{
        gateway::SerenityGateway,
        handler::Handler,
        orchestrator::{Orchestrator, OrchestratorOptions},
        report::{error_chain, ErrorReporter, TracingReporter},
    },
    config::Config,
    error::AppError,
    model::{
        event::GatewayEvent,
        session::{Credential, LifecycleState},
    },
    startup,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_logger(Config::log_level_from_env());

    match run().await {
        Ok(state) => {
            tracing::info!("Discord bot stopped in state {:?}", state);
            ExitCode::from(state.exit_status())
        }
        // Logged as fatal and reported by the orchestrator already
        Err(e) if e.is_reported() => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<LifecycleState, AppError> {
    let config = Config::from_env()?;
    let credential = Credential::new(config.discord_bot_token);
    let reporter: Arc<dyn ErrorReporter> = Arc::new(TracingReporter);

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let client = startup::build_client(&credential, Handler::new(events_tx.clone())).await?;
    let gateway = Arc::new(SerenityGateway::new(client, reporter.clone(), events_tx.clone()));

    let mut orchestrator = Orchestrator::new(
        credential,
        reporter,
        gateway,
        OrchestratorOptions {
            shard_id: config.shard_id,
            shard_count: config.shard_count,
            prefix: config.command_prefix,
            markdown: config.markdown,
            owner: config.owner_id,
            ..OrchestratorOptions::default()
        },
    )?;

    tracing::info!("Starting Discord bot");

    // Login failure leaves the orchestrator Terminated and ends the process with status 1
    orchestrator.start().await?;

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = events_tx.send(GatewayEvent::ShutdownRequested);
        }
    });

    Ok(orchestrator.run(events_rx).await)
}
