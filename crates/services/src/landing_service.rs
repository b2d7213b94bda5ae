use std::sync::Arc;

use gateway::ContentRepository;
use nfrpr_core::model::{SiteStats, Testimonial};
use tracing::warn;

/// Content fetched for the landing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingContent {
    pub testimonials: Vec<Testimonial>,
    pub stats: Option<SiteStats>,
}

#[derive(Clone)]
pub struct LandingService {
    content: Arc<dyn ContentRepository>,
}

impl LandingService {
    #[must_use]
    pub fn new(content: Arc<dyn ContentRepository>) -> Self {
        Self { content }
    }

    /// Fetch testimonials and stats concurrently.
    ///
    /// Failures are logged and leave the corresponding part empty; the page
    /// falls back to static content.
    pub async fn load(&self) -> LandingContent {
        let (testimonials, stats) =
            tokio::join!(self.content.list_testimonials(), self.content.get_stats());

        let testimonials = testimonials.unwrap_or_else(|err| {
            warn!(error = %err, "testimonials unavailable");
            Vec::new()
        });
        let stats = stats
            .map_err(|err| warn!(error = %err, "stats unavailable"))
            .ok();

        LandingContent {
            testimonials,
            stats,
        }
    }
}
