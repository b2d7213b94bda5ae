pub(crate) mod assessment;
mod assessment_complete;
mod home;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use assessment_complete::AssessmentCompleteView;
pub use home::HomeView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
