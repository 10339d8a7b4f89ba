//! Backend endpoint configuration.
//!
//! The base URL is chosen once at startup from the deployment mode and
//! handed to the client as a plain value.

use clap::ValueEnum;

/// Base URL used in production builds.
pub const PRODUCTION_URL: &str = "https://your-flask-backend.com";
/// Base URL used for local development.
pub const DEVELOPMENT_URL: &str = "http://localhost:5000";

/// Deployment mode selecting which backend to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DeploymentMode {
    /// Hosted backend.
    Production,
    /// Backend running on this machine.
    #[default]
    Development,
}

impl DeploymentMode {
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Development => DEVELOPMENT_URL,
        }
    }
}

/// Settings for a [`crate::api::ConversationClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host of the backend, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Point at an arbitrary backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Join an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl From<DeploymentMode> for ClientConfig {
    fn from(mode: DeploymentMode) -> Self {
        Self::new(mode.base_url())
    }
}
