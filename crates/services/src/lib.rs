#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment;
pub mod config;
pub mod error;
pub mod landing_service;
pub mod report_service;

pub use app_services::AppServices;
pub use assessment::{AssessmentLoopService, SelectionOutcome};
pub use config::ApiConfig;
pub use error::{AppServicesError, AssessmentError, ConfigError, ReportError};
pub use landing_service::{LandingContent, LandingService};
pub use report_service::ReportService;
