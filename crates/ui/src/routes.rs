use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::components::Header;
use crate::views::{AssessmentCompleteView, AssessmentView, HomeView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment", AssessmentView)] Assessment {},
        #[route("/assessment-complete", AssessmentCompleteView)] AssessmentComplete {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
