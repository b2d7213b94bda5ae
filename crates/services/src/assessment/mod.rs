mod workflow;

// Public API of the assessment subsystem.
pub use crate::error::AssessmentError;
pub use workflow::{AssessmentLoopService, SelectionOutcome};
