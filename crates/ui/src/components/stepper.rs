use dioxus::prelude::*;

use crate::vm::{StepGlyph, StepVm, StepperVm};

#[component]
pub fn Stepper(vm: StepperVm) -> Element {
    rsx! {
        div { class: "stepper",
            ol { class: "stepper-steps",
                for step in vm.steps.iter().cloned() {
                    StepItem { key: "{step.number}", step }
                }
            }
            div { class: "stepper-footer",
                span { "{vm.progress_label}" }
                span { "{vm.time_label}" }
                span { class: "badge", "{vm.badge}" }
            }
        }
    }
}

#[component]
fn StepItem(step: StepVm) -> Element {
    let glyph = match step.glyph {
        StepGlyph::Check => rsx! { span { class: "glyph check", "✓" } },
        StepGlyph::Icon(icon) => rsx! { span { class: "glyph icon-{icon.as_str()}" } },
        StepGlyph::Number(number) => rsx! { span { class: "glyph number", "{number}" } },
    };

    let connector_class = step
        .connector
        .map(|highlighted| if highlighted { "connector done" } else { "connector" });

    rsx! {
        li { class: step.status.class(),
            div { class: "step-circle", {glyph} }
            div { class: "step-text",
                span { class: "step-label", "{step.label}" }
                span { class: "step-sub-label", "{step.sub_label}" }
            }
            if let Some(class) = connector_class {
                span { class: class }
            }
        }
    }
}
