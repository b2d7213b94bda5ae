//! Shared error types for the services crate.

use thiserror::Error;

use gateway::GatewayError;
use nfrpr_core::NavigatorError;

/// Text shown when the report endpoint declines without a message.
pub const GENERATION_FAILED: &str = "Generation failed";

/// Text shown when the report request itself fails.
pub const REPORT_LOAD_FAILED: &str = "Failed to load report";

/// Errors emitted by `AssessmentLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error(transparent)]
    Navigator(#[from] NavigatorError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `ReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("report generation rejected: {}", .message.as_deref().unwrap_or(GENERATION_FAILED))]
    Rejected { message: Option<String> },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ReportError {
    /// The single line shown on the results page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message } => message
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or(GENERATION_FAILED)
                .to_string(),
            Self::Gateway(_) => REPORT_LOAD_FAILED.to_string(),
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base url {value:?}: {source}")]
    BaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("invalid timeout {0:?}: expected whole seconds")]
    Timeout(String),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
