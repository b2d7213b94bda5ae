use dioxus::prelude::*;

use crate::vm::ProgressPanelVm;

#[component]
pub fn ProgressPanel(vm: ProgressPanelVm) -> Element {
    rsx! {
        section { class: "panel progress-panel",
            div { class: "panel-head",
                h3 { "Assessment Progress" }
                span { class: "on-track", "On track" }
            }
            div { class: "overall",
                div { class: "overall-row",
                    span { "Overall Progress" }
                    span { "{vm.percent}%" }
                }
                div { class: "bar",
                    div { class: "bar-fill", style: "width: {vm.percent}%" }
                }
            }
            ul { class: "categories",
                for row in vm.categories.iter().cloned() {
                    li { key: "{row.title}", class: row.class(),
                        span { "{row.title}" }
                        span { class: "counts", "{row.counts}" }
                    }
                }
            }
            div { class: "compliance", "{vm.compliance_text}" }
        }
    }
}
