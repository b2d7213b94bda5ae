use async_trait::async_trait;
use nfrpr_core::model::{
    AnswerSubmission, ProgressSnapshot, Question, ReportRequest, ReportResponse, SiteStats,
    Testimonial, UserId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::http::HttpGateway;

/// Errors surfaced by gateway adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

/// Source of the question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch the ordered question list.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the bank cannot be fetched or decoded.
    async fn list_questions(&self) -> Result<Vec<Question>, GatewayError>;
}

/// Remote progress store. It is the source of truth for answers.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the current snapshot for a user.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the snapshot cannot be fetched or decoded.
    async fn get_progress(&self, user_id: &UserId) -> Result<ProgressSnapshot, GatewayError>;

    /// Record one answer. Callers refetch instead of trusting a reply body.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the submission is rejected or the request fails.
    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<(), GatewayError>;
}

#[async_trait]
pub trait ReportGateway: Send + Sync {
    /// Request a generated report.
    ///
    /// A reply with `ok == false` is returned as a value, not an error.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failure or an undecodable body.
    async fn generate_report(&self, request: &ReportRequest)
    -> Result<ReportResponse, GatewayError>;
}

/// Landing page content.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `GatewayError` if testimonials cannot be fetched.
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, GatewayError>;

    /// # Errors
    ///
    /// Returns `GatewayError::NotFound` when no stats are published, or other
    /// gateway errors.
    async fn get_stats(&self) -> Result<SiteStats, GatewayError>;
}

/// In-memory backend for tests and offline runs.
///
/// Progress keeps one answer per question; a resubmission replaces the earlier
/// option in place.
#[derive(Clone)]
pub struct InMemoryGateway {
    questions: Arc<Mutex<Vec<Question>>>,
    progress: Arc<Mutex<HashMap<UserId, ProgressSnapshot>>>,
    submissions: Arc<Mutex<Vec<AnswerSubmission>>>,
    report_requests: Arc<Mutex<Vec<ReportRequest>>>,
    report_response: Arc<Mutex<ReportResponse>>,
    testimonials: Arc<Mutex<Vec<Testimonial>>>,
    stats: Arc<Mutex<Option<SiteStats>>>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Arc::new(Mutex::new(Vec::new())),
            progress: Arc::new(Mutex::new(HashMap::new())),
            submissions: Arc::new(Mutex::new(Vec::new())),
            report_requests: Arc::new(Mutex::new(Vec::new())),
            report_response: Arc::new(Mutex::new(ReportResponse::success(
                "Fire risk report generated offline.",
            ))),
            testimonials: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        if let Ok(mut guard) = self.questions.lock() {
            *guard = questions;
        }
        self
    }

    #[must_use]
    pub fn with_progress(self, user_id: UserId, snapshot: ProgressSnapshot) -> Self {
        if let Ok(mut guard) = self.progress.lock() {
            guard.insert(user_id, snapshot);
        }
        self
    }

    #[must_use]
    pub fn with_report_response(self, response: ReportResponse) -> Self {
        if let Ok(mut guard) = self.report_response.lock() {
            *guard = response;
        }
        self
    }

    #[must_use]
    pub fn with_testimonials(self, testimonials: Vec<Testimonial>) -> Self {
        if let Ok(mut guard) = self.testimonials.lock() {
            *guard = testimonials;
        }
        self
    }

    #[must_use]
    pub fn with_stats(self, stats: SiteStats) -> Self {
        if let Ok(mut guard) = self.stats.lock() {
            *guard = Some(stats);
        }
        self
    }

    /// Every submission received, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Connection` if the log lock is poisoned.
    pub fn submissions(&self) -> Result<Vec<AnswerSubmission>, GatewayError> {
        let guard = self
            .submissions
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    /// Every report request received, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Connection` if the log lock is poisoned.
    pub fn report_requests(&self) -> Result<Vec<ReportRequest>, GatewayError> {
        let guard = self
            .report_requests
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryGateway {
    async fn list_questions(&self) -> Result<Vec<Question>, GatewayError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryGateway {
    async fn get_progress(&self, user_id: &UserId) -> Result<ProgressSnapshot, GatewayError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }

    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<(), GatewayError> {
        {
            let mut guard = self
                .progress
                .lock()
                .map_err(|e| GatewayError::Connection(e.to_string()))?;
            let snapshot = guard.entry(submission.user_id.clone()).or_default();
            let answer = submission.as_progress_answer();
            match snapshot
                .answers
                .iter()
                .position(|existing| existing.question_id == answer.question_id)
            {
                Some(index) => snapshot.answers[index] = answer,
                None => snapshot.answers.push(answer),
            }
        }
        let mut log = self
            .submissions
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        log.push(submission.clone());
        Ok(())
    }
}

#[async_trait]
impl ReportGateway for InMemoryGateway {
    async fn generate_report(
        &self,
        request: &ReportRequest,
    ) -> Result<ReportResponse, GatewayError> {
        self.report_requests
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?
            .push(request.clone());
        let guard = self
            .report_response
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ContentRepository for InMemoryGateway {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, GatewayError> {
        let guard = self
            .testimonials
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get_stats(&self) -> Result<SiteStats, GatewayError> {
        let guard = self
            .stats
            .lock()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;
        (*guard).ok_or(GatewayError::NotFound)
    }
}

/// Aggregates the remote collaborators behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Gateway {
    pub questions: Arc<dyn QuestionRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub reports: Arc<dyn ReportGateway>,
    pub content: Arc<dyn ContentRepository>,
}

impl Gateway {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryGateway::new())
    }

    #[must_use]
    pub fn from_in_memory(repo: InMemoryGateway) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let reports: Arc<dyn ReportGateway> = Arc::new(repo.clone());
        let content: Arc<dyn ContentRepository> = Arc::new(repo);
        Self {
            questions,
            progress,
            reports,
            content,
        }
    }

    /// Build a `Gateway` talking to the HTTP API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the base URL is invalid or the client cannot
    /// be built.
    pub fn http(
        base_url: &str,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, GatewayError> {
        let repo = HttpGateway::new(base_url, timeout)?;
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let reports: Arc<dyn ReportGateway> = Arc::new(repo.clone());
        let content: Arc<dyn ContentRepository> = Arc::new(repo);
        Ok(Self {
            questions,
            progress,
            reports,
            content,
        })
    }
}
