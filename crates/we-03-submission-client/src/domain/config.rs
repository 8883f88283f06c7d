//! # Client Configuration
//!
//! Precedence: explicit values (CLI flags) over environment over defaults.

use std::time::Duration;

use super::errors::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8008";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub const ENV_URL: &str = "WE_URL";
pub const ENV_AUTH_USER: &str = "WE_AUTH_USER";
pub const ENV_AUTH_PASSWORD: &str = "WE_AUTH_PASSWORD";

/// HTTP Basic credentials sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub user: String,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root. `http://` is assumed when no scheme is given.
    pub base_url: String,
    pub auth: Option<BasicAuth>,
    /// Bound on a single request, excluding any server-side status wait.
    pub request_timeout: Duration,
    /// Pause between batch status polls.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `WE_URL`, `WE_AUTH_USER` and `WE_AUTH_PASSWORD`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_URL) {
            config.base_url = url;
        }
        if let Some(user) = lookup(ENV_AUTH_USER) {
            config.auth = Some(BasicAuth {
                user,
                password: lookup(ENV_AUTH_PASSWORD),
            });
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_auth(mut self, user: impl Into<String>, password: Option<String>) -> Self {
        self.auth = Some(BasicAuth {
            user: user.into(),
            password,
        });
        self
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Configuration("base_url cannot be empty".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(ClientError::Configuration(
                "request_timeout cannot be 0".into(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(ClientError::Configuration("poll_interval cannot be 0".into()));
        }
        if let Some(auth) = &self.auth {
            if auth.user.is_empty() {
                return Err(ClientError::Configuration("auth user cannot be empty".into()));
            }
        }
        Ok(())
    }

    /// Full URL for an API path such as `batches` or `state/{address}`.
    pub fn endpoint(&self, suffix: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            format!("{}/{}", base, suffix)
        } else {
            format!("http://{}/{}", base, suffix)
        }
    }
}
