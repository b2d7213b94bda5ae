use std::sync::Arc;

use gateway::ReportGateway;
use nfrpr_core::model::ReportRequest;
use tracing::{info, warn};

use crate::error::ReportError;

/// Requests generated reports and reduces the reply to text or an error.
#[derive(Clone)]
pub struct ReportService {
    reports: Arc<dyn ReportGateway>,
}

impl ReportService {
    #[must_use]
    pub fn new(reports: Arc<dyn ReportGateway>) -> Self {
        Self { reports }
    }

    /// Generate a report for `request`. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Rejected` when the endpoint answers `ok == false`,
    /// or `ReportError::Gateway` when the request fails.
    pub async fn generate(&self, request: &ReportRequest) -> Result<String, ReportError> {
        let response = self.reports.generate_report(request).await?;
        if !response.ok {
            warn!(message = ?response.message, "report generation declined");
            return Err(ReportError::Rejected {
                message: response.message,
            });
        }
        let report = response.report.unwrap_or_default();
        info!(chars = report.len(), "report generated");
        Ok(report)
    }

    /// Generate the report for the fixed demonstration payload.
    ///
    /// # Errors
    ///
    /// See [`ReportService::generate`].
    pub async fn generate_demonstration(&self) -> Result<String, ReportError> {
        self.generate(&ReportRequest::demonstration()).await
    }
}
