//! Jira authentication

/// Basic-auth credentials for Jira Cloud (email + API token)
pub struct JiraAuth {
    email: String,
    api_token: String,
}

impl JiraAuth {
    pub fn new(email: String, api_token: String) -> Self {
        Self { email, api_token }
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.email, self.api_token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_basic_auth() {
        let auth = JiraAuth::new("dev@example.com".to_string(), "token123".to_string());
        // base64("dev@example.com:token123")
        assert_eq!(
            auth.to_basic_auth(),
            "Basic ZGV2QGV4YW1wbGUuY29tOnRva2VuMTIz"
        );
    }
}
