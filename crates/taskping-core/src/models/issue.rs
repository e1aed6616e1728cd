//! Issue data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Jira issue reduced to the fields the reminder needs.
///
/// Held in memory for the duration of one poll cycle only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<String>,
}

impl Issue {
    pub fn new(key: String, summary: String) -> Self {
        Self {
            key,
            summary,
            due_date: None,
            assignee: None,
        }
    }

    /// Browse URL for the issue on the given Jira instance
    pub fn browse_url(&self, base_url: &str) -> String {
        format!("{}/browse/{}", base_url.trim_end_matches('/'), self.key)
    }
}
