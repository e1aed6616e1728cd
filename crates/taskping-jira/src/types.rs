//! Jira REST API wire types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskping_core::Issue;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub jql: String,
    pub max_results: u32,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraFields {
    pub summary: Option<String>,
    pub duedate: Option<NaiveDate>,
    pub assignee: Option<JiraUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraUser {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

impl JiraIssue {
    /// Reduce the wire representation to the reminder model
    pub fn into_issue(self) -> Issue {
        Issue {
            key: self.key,
            summary: self
                .fields
                .summary
                .unwrap_or_else(|| "No summary".to_string()),
            due_date: self.fields.duedate,
            assignee: self.fields.assignee.and_then(|user| user.display_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let json = r#"{
            "issues": [
                {
                    "key": "OPS-17",
                    "fields": {
                        "summary": "Rotate API keys",
                        "duedate": "2026-08-12",
                        "assignee": {"displayName": "Dana"}
                    }
                },
                {
                    "key": "OPS-18",
                    "fields": {
                        "summary": null,
                        "duedate": null,
                        "assignee": null
                    }
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.issues.len(), 2);

        let first = response.issues[0].clone().into_issue();
        assert_eq!(first.key, "OPS-17");
        assert_eq!(first.summary, "Rotate API keys");
        assert_eq!(
            first.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 8, 12).unwrap())
        );
        assert_eq!(first.assignee.as_deref(), Some("Dana"));

        let second = response.issues[1].clone().into_issue();
        assert_eq!(second.summary, "No summary");
        assert!(second.due_date.is_none());
        assert!(second.assignee.is_none());
    }

    #[test]
    fn test_decode_missing_issues_array() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.issues.is_empty());
    }

    #[test]
    fn test_encode_search_request() {
        let request = SearchRequest {
            jql: "assignee = currentUser()".to_string(),
            max_results: 50,
            fields: vec!["summary".to_string()],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["jql"], "assignee = currentUser()");
        assert_eq!(json["maxResults"], 50);
    }
}
