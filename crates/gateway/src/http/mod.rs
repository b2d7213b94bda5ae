//! HTTP adapter for the assessment API.

use std::time::Duration;

use async_trait::async_trait;
use nfrpr_core::model::{
    AnswerSubmission, ProgressSnapshot, Question, ReportRequest, ReportResponse, SiteStats,
    Testimonial, UserId,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::repository::{
    ContentRepository, GatewayError, ProgressRepository, QuestionRepository, ReportGateway,
};

#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Build a gateway rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` when the URL cannot carry a path,
    /// or `GatewayError::Http` if the client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| GatewayError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` if the base cannot take segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "request rejected");
            return Err(GatewayError::HttpStatus(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Decode a report reply. A non-success status always yields `ok == false`.
///
/// # Errors
///
/// Returns `GatewayError::HttpStatus` for a failed status with no usable body,
/// or `GatewayError::Decode` for a successful status with an undecodable body.
pub fn interpret_report(status: StatusCode, body: &[u8]) -> Result<ReportResponse, GatewayError> {
    match serde_json::from_slice::<ReportResponse>(body) {
        Ok(mut response) => {
            if !status.is_success() {
                response.ok = false;
            }
            Ok(response)
        }
        Err(_) if !status.is_success() => Err(GatewayError::HttpStatus(status)),
        Err(e) => Err(GatewayError::Decode(e)),
    }
}

/// Decode the testimonial list. Any JSON value other than an array reads as empty.
///
/// # Errors
///
/// Returns `GatewayError::Decode` if the body is not JSON or an entry is malformed.
pub fn decode_testimonials(body: &[u8]) -> Result<Vec<Testimonial>, GatewayError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(Vec::new())
    }
}

#[async_trait]
impl QuestionRepository for HttpGateway {
    async fn list_questions(&self) -> Result<Vec<Question>, GatewayError> {
        self.get_json(self.endpoint(&["api", "questions"])?).await
    }
}

#[async_trait]
impl ProgressRepository for HttpGateway {
    async fn get_progress(&self, user_id: &UserId) -> Result<ProgressSnapshot, GatewayError> {
        self.get_json(self.endpoint(&["api", "questions", "progress", user_id.as_str()])?)
            .await
    }

    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<(), GatewayError> {
        let url = self.endpoint(&["api", "questions", "progress"])?;
        debug!(%url, question = %submission.question_id, "POST answer");
        let response = self.client.post(url).json(submission).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, question = %submission.question_id, "answer rejected");
            return Err(GatewayError::HttpStatus(status));
        }
        Ok(())
    }
}

#[async_trait]
impl ReportGateway for HttpGateway {
    async fn generate_report(
        &self,
        request: &ReportRequest,
    ) -> Result<ReportResponse, GatewayError> {
        let url = self.endpoint(&["api", "reports", "gemini"])?;
        debug!(%url, "POST report");
        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            warn!(%status, "report generation rejected");
        }
        interpret_report(status, &body)
    }
}

#[async_trait]
impl ContentRepository for HttpGateway {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, GatewayError> {
        let url = self.endpoint(&["api", "testimonials"])?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus(status));
        }
        let body = response.bytes().await?;
        decode_testimonials(&body)
    }

    async fn get_stats(&self) -> Result<SiteStats, GatewayError> {
        self.get_json(self.endpoint(&["api", "stats"])?).await
    }
}
