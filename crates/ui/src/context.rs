use std::sync::Arc;

use services::{AssessmentLoopService, LandingService, ReportService};

/// Services the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn assessment(&self) -> Arc<AssessmentLoopService>;
    fn reports(&self) -> Arc<ReportService>;
    fn landing(&self) -> Arc<LandingService>;
}

#[derive(Clone)]
pub struct AppContext {
    assessment: Arc<AssessmentLoopService>,
    reports: Arc<ReportService>,
    landing: Arc<LandingService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            assessment: app.assessment(),
            reports: app.reports(),
            landing: app.landing(),
        }
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

// Provided by the composition root (`crates/app`) or the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
