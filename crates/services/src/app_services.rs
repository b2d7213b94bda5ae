use std::sync::Arc;

use gateway::Gateway;
use nfrpr_core::model::UserId;
use tracing::info;

use crate::assessment::AssessmentLoopService;
use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::landing_service::LandingService;
use crate::report_service::ReportService;

/// Assembles app-facing services over one gateway.
#[derive(Clone)]
pub struct AppServices {
    user_id: UserId,
    assessment: Arc<AssessmentLoopService>,
    reports: Arc<ReportService>,
    landing: Arc<LandingService>,
}

impl AppServices {
    /// Build services backed by the HTTP API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppServicesError> {
        let gateway = Gateway::http(&config.base_url, config.timeout)?;
        info!(
            base_url = %config.base_url,
            user = %config.user_id,
            timeout_secs = config.timeout.map(|t| t.as_secs()),
            "services configured"
        );
        Ok(Self::from_gateway(config.user_id.clone(), &gateway))
    }

    #[must_use]
    pub fn from_gateway(user_id: UserId, gateway: &Gateway) -> Self {
        let assessment = Arc::new(AssessmentLoopService::new(
            user_id.clone(),
            Arc::clone(&gateway.questions),
            Arc::clone(&gateway.progress),
        ));
        let reports = Arc::new(ReportService::new(Arc::clone(&gateway.reports)));
        let landing = Arc::new(LandingService::new(Arc::clone(&gateway.content)));

        Self {
            user_id,
            assessment,
            reports,
            landing,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn landing(&self) -> Arc<LandingService> {
        Arc::clone(&self.landing)
    }
}
