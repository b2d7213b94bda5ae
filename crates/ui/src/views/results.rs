use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;

pub const REPORT_PLACEHOLDER: &str = "Report will appear here.";

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();

    // One request per mount; no retry.
    let resource = use_resource(move || {
        let reports = reports.clone();
        async move {
            reports.generate_demonstration().await.map_err(|err| {
                warn!(error = %err, "report unavailable");
                err.user_message()
            })
        }
    });

    let body = match &*resource.read() {
        None => rsx! { p { class: "report-loading", "Generating report…" } },
        Some(Err(message)) => rsx! { p { class: "report-error", "{message}" } },
        Some(Ok(report)) if report.is_empty() => rsx! { p { "{REPORT_PLACEHOLDER}" } },
        Some(Ok(report)) => rsx! { pre { class: "report", "{report}" } },
    };

    rsx! {
        div { class: "page results",
            h1 { "Assessment Results" }
            {body}
        }
    }
}
