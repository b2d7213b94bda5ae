use dioxus::prelude::*;
use dioxus_router::Link;
use nfrpr_core::model::{
    AssessmentStep, FALLBACK_ESTIMATED_MINUTES, StepDefinition, StepProgress,
};

use crate::components::Stepper;
use crate::routes::Route;
use crate::vm::map_stepper;

#[component]
pub fn AssessmentCompleteView() -> Element {
    // This page pins its stepper instead of deriving it from answers.
    let progress = StepProgress::fixed(
        AssessmentStep::Complete,
        vec![AssessmentStep::Welcome, AssessmentStep::Questions],
    );
    let stepper = map_stepper(
        &StepDefinition::completion_page(),
        &progress,
        FALLBACK_ESTIMATED_MINUTES,
    );

    rsx! {
        div { class: "page assessment-complete",
            Stepper { vm: stepper }
            section { class: "complete-card",
                h1 { "Assessment Complete" }
                p {
                    "Thank you for completing the fire safety questionnaire. Your answers have been saved and your results are ready to review."
                }
                Link { class: "btn primary", to: Route::Results {}, "View Assessment Results" }
            }
        }
    }
}
