//! Jira REST client

use crate::auth::JiraAuth;
use crate::error::{Error, Result};
use crate::types::{JiraIssue, SearchRequest, SearchResponse};
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use taskping_core::Issue;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_RESULTS: u32 = 50;

pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    auth: JiraAuth,
}

impl JiraClient {
    pub fn new(base_url: impl Into<String>, auth: JiraAuth) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Run a JQL search and return the matching issues.
    ///
    /// Fetches only the fields the reminder needs; results are capped at
    /// 50 issues and never paginated.
    pub async fn search_issues(&self, jql: &str) -> Result<Vec<Issue>> {
        let url = format!("{}/rest/api/3/search/jql", self.base_url);
        let request = SearchRequest {
            jql: jql.to_string(),
            max_results: MAX_RESULTS,
            fields: vec![
                "summary".to_string(),
                "duedate".to_string(),
                "assignee".to_string(),
            ],
        };

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.auth.to_basic_auth())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let search: SearchResponse = response.json().await?;
        Ok(search
            .issues
            .into_iter()
            .map(JiraIssue::into_issue)
            .collect())
    }
}
