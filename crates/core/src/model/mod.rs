mod content;
mod ids;
mod progress;
mod question;
mod report;
mod step;

pub use content::{SiteStats, Testimonial};
pub use ids::{OptionId, QuestionId, UserId};
pub use progress::{AnswerState, AnswerSubmission, ProgressAnswer, ProgressSnapshot};
pub use question::{Question, RawOption, RiskLevel};
pub use report::{HighLevelSummary, ReportMeta, ReportRequest, ReportResponse, ReportSummary};
pub use step::{
    AssessmentStep, FALLBACK_ESTIMATED_MINUTES, MINUTES_PER_QUESTION, STEP_COUNT, StepDefinition,
    StepIcon, StepProgress, estimated_minutes,
};
