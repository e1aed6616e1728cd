pub mod config;
pub mod issue;
pub mod state;

pub use config::{Config, JiraConfig, MonitorConfig, TelegramConfig, WorkHours};
pub use issue::Issue;
pub use state::NotifiedState;
