use dioxus::prelude::*;
use dioxus_router::use_navigator;
use nfrpr_core::{AssessmentNavigator, NavigatorEffect};
use tracing::{debug, error, warn};

use crate::components::{ProgressPanel, QuestionCard, Stepper, SummaryPanel};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    AssessmentIntent, LocalSelection, PAGE_SUBTITLE, PAGE_TITLE, map_assessment_page,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let assessment = ctx.assessment();

    let state = use_signal(|| None::<AssessmentNavigator>);
    let local = use_signal(|| None::<LocalSelection>);

    let assessment_for_load = assessment.clone();
    let resource = use_resource(move || {
        let assessment = assessment_for_load.clone();
        let mut state = state;
        async move {
            let loaded = assessment.start().await.map_err(|err| {
                error!(error = %err, "assessment load failed");
                ViewError::LoadFailed
            })?;
            state.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });

    // Tasks spawned here are owned by this scope and dropped with it, so a
    // reply that lands after the page is left never touches its signals.
    let dispatch_intent = use_callback(move |intent: AssessmentIntent| {
        let mut state = state;
        let mut local = local;

        match intent {
            AssessmentIntent::Select(option_id) => {
                let pending = {
                    let guard = state.read();
                    let Some(current) = guard.as_ref() else {
                        return;
                    };
                    match current.pending_answer(assessment.user_id(), option_id.clone()) {
                        Ok(pending) => pending,
                        Err(err) => {
                            warn!(error = %err, "selection ignored");
                            return;
                        }
                    }
                };
                local.set(Some(LocalSelection {
                    question_index: pending.question_index,
                    option_id,
                }));

                let assessment = assessment.clone();
                spawn(async move {
                    match assessment.record(&pending).await {
                        Ok(event) => {
                            if let Some(current) = state.write().as_mut() {
                                let _ = current.apply(event);
                            }
                        }
                        // Progress stays as last fetched; the user may pick again.
                        Err(err) => error!(
                            error = %err,
                            question = %pending.submission.question_id,
                            "answer submission failed"
                        ),
                    }
                });
            }
            AssessmentIntent::Previous => {
                if let Some(current) = state.write().as_mut() {
                    current.go_to_previous();
                }
            }
            AssessmentIntent::Next => {
                let effect = state
                    .write()
                    .as_mut()
                    .and_then(AssessmentNavigator::go_to_next);
                if effect == Some(NavigatorEffect::NavigateToCompletion) {
                    navigator.push(Route::AssessmentComplete {});
                }
            }
            AssessmentIntent::Save => {
                debug!("answers are saved on selection");
            }
        }
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
            handles.register(dispatch_intent);
        }
    });

    let page = state
        .read()
        .as_ref()
        .map(|current| map_assessment_page(current, local.read().as_ref()));

    let body = match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading questions..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "load-error",
                p { "{err.message()}" }
                button {
                    class: "btn secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut resource = resource;
                        resource.restart();
                    },
                    "Retry"
                }
            }
        },
        ViewState::Ready(()) => match page {
            Some(page) => rsx! {
                Stepper { vm: page.stepper }
                div { class: "assessment-grid",
                    section { class: "assessment-main",
                        div { class: "breadcrumb", "{page.breadcrumb}" }
                        match page.card {
                            Some(card) => rsx! {
                                QuestionCard {
                                    key: "{card.question_index}",
                                    card,
                                    on_intent: dispatch_intent,
                                }
                            },
                            None => rsx! {
                                p { class: "empty", "No questions are available yet." }
                            },
                        }
                    }
                    aside { class: "assessment-side",
                        ProgressPanel { vm: page.progress }
                        SummaryPanel { vm: page.summary }
                    }
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div { class: "page assessment",
            div { class: "page-title",
                h1 { "{PAGE_TITLE}" }
                p { "{PAGE_SUBTITLE}" }
            }
            {body}
            HelpFooter {}
        }
    }
}

#[component]
fn HelpFooter() -> Element {
    rsx! {
        footer { class: "help-footer",
            div {
                h4 { "Need Help with Fire Safety Terms?" }
                span { class: "secure", "Secure & Confidential" }
            }
            ul { class: "help-links",
                li { "UK Fire Safety 2005" }
                li { "Building Regulations Section B" }
                li { "Contact Support" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AssessmentIntent>>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<AssessmentIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<AssessmentIntent> {
        (*self.dispatch.borrow()).expect("assessment dispatch registered")
    }
}
