#![forbid(unsafe_code)]

pub mod model;
pub mod navigator;
pub mod presentation;
pub mod summary;

pub use navigator::{
    AssessmentNavigator, NavigatorEffect, NavigatorError, NavigatorEvent, PendingAnswer,
};
pub use presentation::{OptionState, PresentedOption, QuestionPresentation, build_presentation};
pub use summary::{AssessmentSummary, CategoryProgress, CategoryStatus, RiskOverview};
