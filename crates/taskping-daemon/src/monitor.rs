//! Polling monitor that bridges Jira and Telegram

use std::collections::HashSet;

use chrono::{Local, Timelike};
use taskping_core::models::Config;
use taskping_core::storage::StateStorage;
use taskping_core::{Issue, NotifiedState};
use taskping_jira::JiraClient;
use taskping_telegram::{format_reminder, TelegramClient};

/// Monitor error
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Jira error: {0}")]
    Jira(#[from] taskping_jira::Error),

    #[error("Telegram error: {0}")]
    Telegram(#[from] taskping_telegram::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] taskping_core::Error),
}

pub type Result<T> = std::result::Result<T, MonitorError>;

/// Result of one poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No matching issues; the notified state was cleared
    AllClear,
    /// A reminder was delivered for this many issues
    Notified { sent: usize },
    /// Matching issues exist but all were announced earlier
    AlreadyNotified { pending: usize },
    /// New issues found outside the work-hours window; nothing sent
    OutsideWorkHours { pending: usize },
}

/// Polls Jira and forwards reminders for issues not yet announced.
///
/// The set of announced issue keys is persisted between runs so a
/// polling cadence does not re-send the same reminder every cycle.
pub struct Monitor {
    config: Config,
    jira: JiraClient,
    telegram: TelegramClient,
    storage: StateStorage,
    notified: NotifiedState,
}

impl Monitor {
    pub fn new(
        config: Config,
        jira: JiraClient,
        telegram: TelegramClient,
        storage: StateStorage,
    ) -> Result<Self> {
        let notified = storage.load()?;

        Ok(Self {
            config,
            jira,
            telegram,
            storage,
            notified,
        })
    }

    /// Run one poll cycle at the current local time
    pub async fn check(&mut self) -> Result<CheckOutcome> {
        self.check_at(Local::now().hour()).await
    }

    /// Run one poll cycle as if the local time were the given hour.
    ///
    /// A failed Jira call returns before any Telegram traffic.
    pub async fn check_at(&mut self, hour: u32) -> Result<CheckOutcome> {
        tracing::info!("Checking Jira for matching issues...");
        let issues = self.jira.search_issues(&self.config.jira.jql).await?;

        if issues.is_empty() {
            tracing::info!("No matching issues.");
            self.notified.clear();
            self.storage.save(&self.notified)?;
            return Ok(CheckOutcome::AllClear);
        }

        let current_keys: HashSet<&str> = issues.iter().map(|issue| issue.key.as_str()).collect();

        let new_issues: Vec<Issue> = issues
            .iter()
            .filter(|issue| !self.notified.contains(&issue.key))
            .cloned()
            .collect();

        let outcome = if new_issues.is_empty() {
            tracing::info!("{} matching issues, all already announced.", issues.len());
            CheckOutcome::AlreadyNotified {
                pending: issues.len(),
            }
        } else if !self.config.monitor.work_hours.contains(hour) {
            // Outside work hours the issues stay unmarked, so the
            // reminder goes out on the first in-hours cycle.
            tracing::info!(
                "Outside work hours, holding back {} reminders.",
                new_issues.len()
            );
            CheckOutcome::OutsideWorkHours {
                pending: new_issues.len(),
            }
        } else {
            let message = format_reminder(&new_issues, &self.config.jira.base_url);
            self.telegram.send_message(&message).await?;

            for issue in &new_issues {
                self.notified.mark(issue.key.clone());
            }

            tracing::info!("Reminder sent ({} issues).", new_issues.len());
            CheckOutcome::Notified {
                sent: new_issues.len(),
            }
        };

        // Keys of issues resolved since the last poll leave the state,
        // so a reopened issue triggers a fresh reminder.
        self.notified.retain(|key| current_keys.contains(key.as_str()));
        self.storage.save(&self.notified)?;

        Ok(outcome)
    }

    /// Announced keys currently held by the monitor
    pub fn notified(&self) -> &NotifiedState {
        &self.notified
    }
}
