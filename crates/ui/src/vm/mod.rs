mod assessment_vm;
mod landing_vm;
mod nav_vm;
mod stepper_vm;
mod summary_vm;

pub use assessment_vm::{
    AssessmentIntent, AssessmentPageVm, COMPLETE_LABEL, LocalSelection, NEXT_LABEL, OptionVm,
    PAGE_SUBTITLE, PAGE_TITLE, QuestionCardVm, breadcrumb, map_assessment_page,
    map_question_card,
};
pub use landing_vm::{
    FAQS, FaqAccordion, FaqItem, LandingVm, StatsVm, TestimonialVm, fallback_testimonials,
    map_landing,
};
pub use nav_vm::{NavLinkVm, NavTarget, map_nav_links};
pub use stepper_vm::{StepGlyph, StepStatus, StepVm, StepperVm, map_stepper};
pub use summary_vm::{
    CategoryRowVm, ProgressPanelVm, QuickStatVm, SummaryPanelVm, map_progress_panel,
    map_summary_panel,
};
