use dioxus::prelude::*;
use dioxus_router::{Link, use_route};

use crate::routes::Route;
use crate::vm::{NavLinkVm, NavTarget, map_nav_links};

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Home => Route::Home {},
        NavTarget::Assessment => Route::Assessment {},
        NavTarget::Results => Route::Results {},
    }
}

#[component]
pub fn Header() -> Element {
    let path = use_route::<Route>().to_string();
    let links = map_nav_links(&path);

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: Route::Home {},
                span { class: "brand-mark", "🔥" }
                div {
                    span { class: "brand-name", "NFRPR" }
                    div { class: "brand-tagline", "National Fire Risk Prevention Report" }
                }
            }
            nav { class: "site-nav",
                for link in links {
                    NavItem { key: "{link.label}", link }
                }
            }
        }
    }
}

#[component]
fn NavItem(link: NavLinkVm) -> Element {
    rsx! {
        Link { class: link.class(), to: route_for(link.target), "{link.label}" }
    }
}
