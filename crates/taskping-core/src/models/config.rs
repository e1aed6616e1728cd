//! Runtime configuration loaded from the environment

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// JQL used when `JIRA_JQL` is not set: open issues assigned to the
/// authenticated user, due within the next week.
pub const DEFAULT_JQL: &str =
    "assignee = currentUser() AND resolution = EMPTY AND duedate <= endOfDay(\"+7d\") ORDER BY duedate ASC";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub jira: JiraConfig,
    pub telegram: TelegramConfig,
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub jql: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorConfig {
    pub work_hours: WorkHours,
}

/// Local-time window during which reminders may be delivered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkHours {
    pub start: u32,
    pub end: u32,
}

impl Config {
    /// Load the configuration from environment variables.
    ///
    /// `JIRA_URL`, `JIRA_EMAIL`, `JIRA_API_TOKEN`, `TELEGRAM_TOKEN` and
    /// `TELEGRAM_CHAT_ID` are required. `JIRA_JQL`, `TASKPING_WORK_START`
    /// and `TASKPING_WORK_END` override the defaults.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            jira: JiraConfig {
                base_url: required_var("JIRA_URL")?
                    .trim_end_matches('/')
                    .to_string(),
                email: required_var("JIRA_EMAIL")?,
                api_token: required_var("JIRA_API_TOKEN")?,
                jql: optional_var("JIRA_JQL").unwrap_or_else(|| DEFAULT_JQL.to_string()),
            },
            telegram: TelegramConfig {
                token: required_var("TELEGRAM_TOKEN")?,
                chat_id: required_var("TELEGRAM_CHAT_ID")?,
            },
            monitor: MonitorConfig {
                work_hours: WorkHours {
                    start: hour_var("TASKPING_WORK_START", WorkHours::default().start)?,
                    end: hour_var("TASKPING_WORK_END", WorkHours::default().end)?,
                },
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.jira.validate()?;
        self.telegram.validate()?;
        self.monitor.validate()?;
        Ok(())
    }
}

impl JiraConfig {
    /// Validate Jira configuration
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Validation(
                "JIRA_URL must start with http:// or https://".to_string(),
            ));
        }

        if self.email.trim().is_empty() {
            return Err(Error::Validation("JIRA_EMAIL cannot be empty".to_string()));
        }

        if self.api_token.trim().is_empty() {
            return Err(Error::Validation(
                "JIRA_API_TOKEN cannot be empty".to_string(),
            ));
        }

        if self.jql.trim().is_empty() {
            return Err(Error::Validation("JIRA_JQL cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl TelegramConfig {
    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::Validation(
                "TELEGRAM_TOKEN cannot be empty".to_string(),
            ));
        }

        if self.chat_id.trim().is_empty() {
            return Err(Error::Validation(
                "TELEGRAM_CHAT_ID cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl MonitorConfig {
    /// Validate monitor configuration
    pub fn validate(&self) -> Result<()> {
        self.work_hours.validate()
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            work_hours: WorkHours::default(),
        }
    }
}

impl WorkHours {
    /// Validate the work-hours window
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(Error::Validation(format!(
                "Work hours start ({}) must be before end ({})",
                self.start, self.end
            )));
        }

        if self.end > 24 {
            return Err(Error::Validation(format!(
                "Work hours end ({}) must be at most 24",
                self.end
            )));
        }

        Ok(())
    }

    /// Whether the given local hour falls inside the window
    pub fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self { start: 8, end: 20 }
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::Env(format!("{} is not set", name))),
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn hour_var(name: &str, default: u32) -> Result<u32> {
    match optional_var(name) {
        Some(value) => value
            .parse()
            .map_err(|_| Error::Env(format!("{} must be an hour (0-24), got '{}'", name, value))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const REQUIRED: [&str; 5] = [
        "JIRA_URL",
        "JIRA_EMAIL",
        "JIRA_API_TOKEN",
        "TELEGRAM_TOKEN",
        "TELEGRAM_CHAT_ID",
    ];

    const OPTIONAL: [&str; 3] = ["JIRA_JQL", "TASKPING_WORK_START", "TASKPING_WORK_END"];

    fn set_required_vars() {
        unsafe {
            std::env::set_var("JIRA_URL", "https://example.atlassian.net");
            std::env::set_var("JIRA_EMAIL", "dev@example.com");
            std::env::set_var("JIRA_API_TOKEN", "secret-token");
            std::env::set_var("TELEGRAM_TOKEN", "123:abc");
            std::env::set_var("TELEGRAM_CHAT_ID", "-100200300");
        }
    }

    fn clear_vars() {
        unsafe {
            for name in REQUIRED.iter().chain(OPTIONAL.iter()) {
                std::env::remove_var(name);
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_vars();
        set_required_vars();

        let config = Config::from_env().unwrap();
        assert_eq!(config.jira.base_url, "https://example.atlassian.net");
        assert_eq!(config.jira.jql, DEFAULT_JQL);
        assert_eq!(config.monitor.work_hours, WorkHours { start: 8, end: 20 });

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_var() {
        clear_vars();
        set_required_vars();
        unsafe {
            std::env::remove_var("JIRA_API_TOKEN");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("JIRA_API_TOKEN"));

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_vars();
        set_required_vars();
        unsafe {
            std::env::set_var("JIRA_URL", "https://example.atlassian.net/");
            std::env::set_var("JIRA_JQL", "project = OPS ORDER BY duedate ASC");
            std::env::set_var("TASKPING_WORK_START", "9");
            std::env::set_var("TASKPING_WORK_END", "17");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.jira.base_url, "https://example.atlassian.net");
        assert_eq!(config.jira.jql, "project = OPS ORDER BY duedate ASC");
        assert_eq!(config.monitor.work_hours, WorkHours { start: 9, end: 17 });

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_bad_hour() {
        clear_vars();
        set_required_vars();
        unsafe {
            std::env::set_var("TASKPING_WORK_START", "soon");
        }

        assert!(Config::from_env().is_err());

        clear_vars();
    }

    #[test]
    fn test_jira_config_validation() {
        let mut config = JiraConfig {
            base_url: "https://example.atlassian.net".to_string(),
            email: "dev@example.com".to_string(),
            api_token: "secret".to_string(),
            jql: DEFAULT_JQL.to_string(),
        };
        assert!(config.validate().is_ok());

        config.base_url = "example.atlassian.net".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://example.atlassian.net".to_string();
        config.api_token = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_work_hours_validation() {
        assert!(WorkHours::default().validate().is_ok());
        assert!(WorkHours { start: 0, end: 24 }.validate().is_ok());
        assert!(WorkHours { start: 20, end: 8 }.validate().is_err());
        assert!(WorkHours { start: 8, end: 25 }.validate().is_err());
    }

    #[test]
    fn test_work_hours_contains() {
        let hours = WorkHours::default();
        assert!(hours.contains(8));
        assert!(hours.contains(19));
        assert!(!hours.contains(20));
        assert!(!hours.contains(7));
        assert!(!hours.contains(23));
    }
}
