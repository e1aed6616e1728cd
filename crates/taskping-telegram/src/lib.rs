//! TaskPing Telegram Integration
//!
//! Message formatting and the Bot API client used to deliver reminders.

pub mod client;
pub mod error;
pub mod message;

pub use client::TelegramClient;
pub use error::{Error, Result};
pub use message::format_reminder;
