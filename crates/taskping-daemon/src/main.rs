//! TaskPing Daemon
//!
//! Polls Jira for matching issues and forwards reminders to a Telegram
//! chat. Runs either as a single cron-style check or as a long-lived
//! polling loop.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use taskping_core::models::Config;
use taskping_core::storage::{default_state_path, StateStorage};
use taskping_daemon::Monitor;
use taskping_jira::{JiraAuth, JiraClient};
use taskping_telegram::TelegramClient;

#[derive(Parser, Debug)]
#[command(name = "taskpingd")]
#[command(about = "Jira reminder bot for Telegram", long_about = None)]
struct Args {
    /// Run a single check and exit
    #[arg(long)]
    once: bool,

    /// Seconds between checks in loop mode
    #[arg(short, long, default_value_t = 1800)]
    interval: u64,

    /// Override the notified-state file location
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .init();

    let config = Config::from_env()?;

    let auth = JiraAuth::new(config.jira.email.clone(), config.jira.api_token.clone());
    let jira = JiraClient::new(config.jira.base_url.clone(), auth)?;
    let telegram = TelegramClient::new(
        config.telegram.token.clone(),
        config.telegram.chat_id.clone(),
    )?;

    let state_path = args.state_file.unwrap_or_else(default_state_path);
    tracing::info!("State file: {}", state_path.display());
    let storage = StateStorage::new(state_path);

    let mut monitor = Monitor::new(config, jira, telegram, storage)?;

    if args.once {
        let outcome = monitor.check().await?;
        tracing::info!("Check finished: {:?}", outcome);
        return Ok(());
    }

    run_loop(&mut monitor, Duration::from_secs(args.interval)).await
}

async fn run_loop(monitor: &mut Monitor, interval: Duration) -> Result<()> {
    tracing::info!(
        "TaskPing daemon starting, polling every {}s",
        interval.as_secs()
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // A failed cycle is logged and retried on the next tick.
                match monitor.check().await {
                    Ok(outcome) => tracing::debug!("Check finished: {:?}", outcome),
                    Err(e) => tracing::error!("Error during check: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
                return Ok(());
            }
        }
    }
}
