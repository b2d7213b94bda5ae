use dioxus::prelude::*;

use crate::vm::{AssessmentIntent, OptionVm, QuestionCardVm};

#[component]
pub fn QuestionCard(card: QuestionCardVm, on_intent: Callback<AssessmentIntent>) -> Element {
    rsx! {
        article { class: "question-card",
            div { class: "question-head",
                span { class: "question-number", "{card.question_number}" }
                span { "{card.header()}" }
                span { class: "category-label", "{card.category_label}" }
            }
            h3 { class: "question-text", "{card.question_text}" }
            if !card.subtitle.is_empty() {
                p { class: "question-subtitle", "{card.subtitle}" }
            }
            div { class: "context-box",
                div { class: "context-title", "{card.context_title}" }
                if !card.context_body.is_empty() {
                    p { "{card.context_body}" }
                }
            }
            div { class: "options", role: "radiogroup",
                for option in card.options.iter().cloned() {
                    OptionRow { key: "{option.id}", option, on_intent }
                }
            }
            if let Some(note) = card.note.as_ref() {
                div { class: "note", "Note: {note}" }
            }
            div { class: "card-actions",
                button {
                    class: "btn secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::Save),
                    "Save Progress"
                }
                button {
                    class: "btn secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::Previous),
                    "Previous Question"
                }
                button {
                    class: "btn primary",
                    r#type: "button",
                    disabled: !card.next_enabled,
                    onclick: move |_| on_intent.call(AssessmentIntent::Next),
                    "{card.next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionRow(option: OptionVm, on_intent: Callback<AssessmentIntent>) -> Element {
    let id = option.id.clone();

    rsx! {
        label { class: option.class(),
            input {
                r#type: "radio",
                name: "assessmentOption",
                value: "{option.id}",
                checked: option.selected,
                onchange: move |_| on_intent.call(AssessmentIntent::Select(id.clone())),
            }
            div { class: "option-body",
                div { class: "option-title-row",
                    span { class: "option-title", "{option.title}" }
                    if let Some(badge) = option.risk_badge() {
                        span { class: option.risk_class(), "{badge}" }
                    }
                }
                if let Some(description) = option.description.as_ref() {
                    p { class: "option-description", "{description}" }
                }
                if !option.tags.is_empty() {
                    div { class: "option-tags",
                        for tag in option.tags.iter() {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
