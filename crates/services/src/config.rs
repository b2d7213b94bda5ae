use std::env;
use std::time::Duration;

use nfrpr_core::model::UserId;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_USER_ID: &str = "demo-user";

pub const ENV_API_BASE_URL: &str = "NFRPR_API_BASE_URL";
pub const ENV_USER_ID: &str = "NFRPR_USER_ID";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "NFRPR_HTTP_TIMEOUT_SECS";

/// Where the remote API lives and whose progress to track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_id: UserId,
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: UserId::new(DEFAULT_USER_ID),
            timeout: None,
        }
    }
}

impl ApiConfig {
    /// Read configuration from `NFRPR_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL or timeout is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL or timeout is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = non_empty(lookup(ENV_API_BASE_URL)) {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(user_id) = non_empty(lookup(ENV_USER_ID)) {
            config.user_id = UserId::new(user_id);
        }
        if let Some(timeout) = non_empty(lookup(ENV_HTTP_TIMEOUT_SECS)) {
            config.timeout = parse_timeout(&timeout)?;
        }
        Ok(config)
    }

    /// Replace the base URL after validating it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BaseUrl` if `value` is not an absolute URL.
    pub fn with_base_url(mut self, value: &str) -> Result<Self, ConfigError> {
        Url::parse(value).map_err(|source| ConfigError::BaseUrl {
            value: value.to_string(),
            source,
        })?;
        self.base_url = value.to_string();
        Ok(self)
    }
}

/// Parse whole seconds; zero disables the timeout.
///
/// # Errors
///
/// Returns `ConfigError::Timeout` for anything but a non-negative integer.
pub fn parse_timeout(value: &str) -> Result<Option<Duration>, ConfigError> {
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::Timeout(value.to_string()))?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
