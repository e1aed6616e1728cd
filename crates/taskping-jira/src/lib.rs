//! TaskPing Jira Integration
//!
//! Client library for fetching matching issues from the Jira REST API.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::JiraAuth;
pub use client::JiraClient;
pub use error::{Error, Result};
pub use types::*;
