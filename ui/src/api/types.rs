use thiserror::Error;

/// Base URLs of the two HTTP services the app talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Backend holding users and saved images
    pub api_base: String,
    /// Fulfillment proxy serving blueprints and products
    pub printify_base: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3001".to_string(),
            printify_base: "http://localhost:3004".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn blueprints_url(&self) -> String {
        format!("{}/api/printify/blueprints", self.printify_base.trim_end_matches('/'))
    }

    pub fn user_images_url(&self, user_id: &str) -> String {
        format!("{}/api/images/user/{}", self.api_base.trim_end_matches('/'), user_id)
    }
}

/// Supplies the bearer token attached to outgoing requests.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// A token captured once, e.g. from the current session.
#[derive(Clone, Debug, Default)]
pub struct StaticToken(pub Option<String>);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("not signed in")]
    NoSession,
}
