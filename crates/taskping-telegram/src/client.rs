//! Telegram Bot API client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(token: String, chat_id: String) -> Result<Self> {
        Self::with_api_base(token, chat_id, DEFAULT_API_BASE)
    }

    /// Build a client against a non-default API base (used by tests)
    pub fn with_api_base(
        token: String,
        chat_id: String,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
            chat_id,
        })
    }

    /// Deliver one message to the configured chat
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            disable_web_page_preview: true,
        };

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        let body: ApiResponse = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(Error::Api(format!("sendMessage failed with {}", status)));
            }
            Err(e) => return Err(Error::Http(e)),
        };

        if !body.ok {
            return Err(Error::Api(
                body.description
                    .unwrap_or_else(|| format!("sendMessage failed with {}", status)),
            ));
        }

        Ok(())
    }
}
