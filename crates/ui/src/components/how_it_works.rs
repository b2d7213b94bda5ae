use dioxus::prelude::*;

struct HowStep {
    number: u8,
    title: &'static str,
    duration: &'static str,
    body: &'static str,
}

const STEPS: [HowStep; 3] = [
    HowStep {
        number: 1,
        title: "Answer Questions",
        duration: "5–8 minutes",
        body: "Complete our guided questionnaire covering all aspects of fire safety in your property. Simple multiple-choice format suitable for all technical levels.",
    },
    HowStep {
        number: 2,
        title: "Get Assessment",
        duration: "Instant",
        body: "Our system evaluates your responses against UK fire safety regulations and generates a comprehensive risk assessment score.",
    },
    HowStep {
        number: 3,
        title: "Download Report",
        duration: "Immediate",
        body: "Receive a professional PDF report with detailed findings, recommendations, and compliance documentation for your records.",
    },
];

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { id: "how-it-works", class: "how-it-works",
            span { class: "eyebrow", "How it works" }
            h2 { "Three Simple Steps to Compliance" }
            p { class: "lead",
                "Our streamlined process makes fire risk assessment accessible to property owners and managers of all experience levels."
            }
            div { class: "how-steps",
                for step in STEPS.iter() {
                    div { key: "{step.number}", class: "how-step",
                        div { class: "how-step-number", "{step.number}" }
                        div { class: "how-step-head",
                            h3 { "{step.title}" }
                            span { class: "how-step-duration", "{step.duration}" }
                        }
                        p { "{step.body}" }
                    }
                }
            }
            div { class: "regulations-callout",
                h3 { "UK Fire Safety Regulations" }
                p {
                    "Our assessment covers all requirements under the Regulatory Reform (Fire Safety) Order 2005 and Building Regulations Approved Document B, ensuring complete compliance for your property."
                }
            }
        }
    }
}
