use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use gateway::Gateway;
use nfrpr_core::model::UserId;
use services::{AppServices, AssessmentLoopService, LandingService, ReportService};

use crate::context::{UiApp, build_app_context};
use crate::views::assessment::AssessmentTestHandles;
use crate::views::{AssessmentCompleteView, AssessmentView, HomeView, ResultsView};

pub const TEST_USER: &str = "demo-user";

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn assessment(&self) -> Arc<AssessmentLoopService> {
        self.services.assessment()
    }

    fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }

    fn landing(&self) -> Arc<LandingService> {
        self.services.landing()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Assessment,
    AssessmentComplete,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    assessment_handles: Option<AssessmentTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.assessment_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::AssessmentComplete => rsx! { AssessmentCompleteView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub assessment_handles: Option<AssessmentTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&self, intent: crate::vm::AssessmentIntent) {
        let handles = self
            .assessment_handles
            .as_ref()
            .expect("assessment handles installed");
        let dispatch = handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, gateway: &Gateway) -> ViewHarness {
    let services = AppServices::from_gateway(UserId::new(TEST_USER), gateway);
    let app = Arc::new(TestApp { services });
    let assessment_handles = match view {
        ViewKind::Assessment => Some(AssessmentTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            assessment_handles: assessment_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        assessment_handles,
    }
}
