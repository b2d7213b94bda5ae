use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::HowItWorks;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FAQS, FaqAccordion, FaqItem, LandingVm, TestimonialVm, map_landing};

const HERO_FEATURES: [&str; 4] = [
    "National Regulation Compliant",
    "Complete in 10-15 Minutes",
    "Professional PDF Reports",
    "Instant Download",
];

const RESULT_CARDS: [(&str, &str); 4] = [
    (
        "Risk Assessment Scores",
        "Detailed scoring across all fire safety categories with clear risk levels.",
    ),
    (
        "Priority Recommendations",
        "Actionable steps ranked by importance to improve fire safety compliance.",
    ),
    (
        "Compliance Report",
        "Professional PDF report suitable for insurance and regulatory purposes.",
    ),
    (
        "Action Checklist",
        "Step-by-step guidance to address identified risks.",
    ),
];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let landing = ctx.landing();
    let faq = use_signal(FaqAccordion::default);

    // Fetch failures are absorbed by the service; the page always renders.
    let resource = use_resource(move || {
        let landing = landing.clone();
        async move { Ok::<_, ViewError>(map_landing(&landing.load().await)) }
    });

    let vm = match view_state_from_resource(&resource) {
        ViewState::Ready(vm) => vm,
        ViewState::Idle | ViewState::Loading | ViewState::Error(_) => LandingVm::default(),
    };
    let open_faq = faq();

    rsx! {
        div { class: "page home",
            section { class: "hero",
                span { class: "badge", "National Fire Safety Certified" }
                h1 { "Simplify Your" }
                h1 { class: "accent", "Fire Risk Assessment" }
                div { class: "price", "For £35.00" }
                p { class: "lead",
                    "Generate compliant national fire safety assessments in minutes. Professional reports, downloadable PDFs, and complete regulatory compliance made simple."
                }
                ul { class: "hero-features",
                    for feature in HERO_FEATURES {
                        li { key: "{feature}", "{feature}" }
                    }
                }
                div { class: "hero-actions",
                    Link { class: "btn primary", to: Route::Assessment {}, "Start Now" }
                    Link { class: "btn secondary", to: Route::Assessment {},
                        "Fully Compliant Risk Assessment for only £35"
                    }
                }
                p { class: "fine-print",
                    "No registration required • Free assessment • Instant results"
                }
            }

            HowItWorks {}

            section { class: "expectations",
                h2 { "What to Expect in Your Results" }
                p { "Your comprehensive fire risk assessment will include" }
                div { class: "expectation-cards",
                    for (title, body) in RESULT_CARDS {
                        div { key: "{title}", class: "expectation-card",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            section { class: "testimonials",
                span { class: "eyebrow", "TESTIMONIALS" }
                h2 { "What Property Professionals Say" }
                div { class: "testimonial-cards",
                    for (index, testimonial) in vm.testimonials.iter().cloned().enumerate() {
                        TestimonialCard { key: "{index}", testimonial }
                    }
                }
                div { class: "stats",
                    div {
                        div { class: "figure", "{vm.stats.rating}" }
                        div { "Average Rating" }
                    }
                    div {
                        div { class: "figure", "{vm.stats.approval}" }
                        div { "Would Recommend" }
                    }
                    div {
                        div { class: "figure", "{vm.stats.compliance}" }
                        div { "Compliance Rate" }
                    }
                }
            }

            section { class: "faq",
                h2 { "Frequently Asked Questions" }
                p { "Common questions about our fire safety assessment process" }
                for (index, item) in FAQS.iter().copied().enumerate() {
                    FaqEntry {
                        key: "{index}",
                        item,
                        open: open_faq.is_open(index),
                        on_toggle: move |()| {
                            let mut faq = faq;
                            faq.write().toggle(index);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: TestimonialVm) -> Element {
    rsx! {
        div { class: "testimonial-card",
            div { class: "stars", "★★★★★" }
            p { class: "quote", "{testimonial.text}" }
            div { class: "person",
                span { class: "initials", "{testimonial.initials}" }
                div {
                    div { class: "name", "{testimonial.name}" }
                    div { class: "role", "{testimonial.role}" }
                    div { class: "company", "{testimonial.company}" }
                }
            }
            span { class: "tag", "{testimonial.category}" }
        }
    }
}

#[component]
fn FaqEntry(item: FaqItem, open: bool, on_toggle: Callback<()>) -> Element {
    let class = if open { "faq-item open" } else { "faq-item" };

    rsx! {
        div { class,
            button {
                class: "faq-question",
                r#type: "button",
                onclick: move |_| on_toggle.call(()),
                "{item.question}"
            }
            if open {
                p { class: "faq-answer", "{item.answer}" }
            }
        }
    }
}
