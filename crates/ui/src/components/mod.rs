mod header;
mod how_it_works;
mod progress_panel;
mod question_card;
mod stepper;
mod summary_panel;

pub use header::Header;
pub use how_it_works::HowItWorks;
pub use progress_panel::ProgressPanel;
pub use question_card::QuestionCard;
pub use stepper::Stepper;
pub use summary_panel::SummaryPanel;
