use dioxus::prelude::*;

use crate::vm::SummaryPanelVm;

#[component]
pub fn SummaryPanel(vm: SummaryPanelVm) -> Element {
    rsx! {
        section { class: "panel summary-panel",
            div { class: "panel-head",
                h3 { "Assessment Summary" }
                span { class: "live", "Live" }
            }
            div { class: "totals",
                div {
                    div { class: "figure", "{vm.answered}" }
                    div { "Questions Answered" }
                }
                div {
                    div { class: "figure", "{vm.remaining}" }
                    div { "Remaining" }
                }
            }
            div { class: "completion",
                div { class: "figure", "{vm.percent}%" }
                div { "Complete" }
            }
            div { class: vm.risk_class(), "{vm.risk_label()}" }
            dl { class: "quick-stats",
                for stat in vm.stats.iter() {
                    div { key: "{stat.label}",
                        dt { "{stat.label}" }
                        dd { "{stat.value}" }
                    }
                }
            }
            ul { class: "regulation-links",
                for link in vm.links.iter() {
                    li { key: "{link}", "{link}" }
                }
            }
        }
    }
}
