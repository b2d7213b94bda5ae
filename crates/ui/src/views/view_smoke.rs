use std::sync::Arc;

use async_trait::async_trait;
use gateway::{Gateway, GatewayError, InMemoryGateway, QuestionRepository, ReportGateway};
use nfrpr_core::model::{
    OptionId, ProgressAnswer, ProgressSnapshot, Question, ReportRequest, ReportResponse,
    SiteStats, Testimonial, UserId,
};

use super::test_harness::{TEST_USER, ViewKind, setup_view_harness};
use crate::vm::AssessmentIntent;

fn bank() -> Vec<Question> {
    vec![
        Question::new("q1", "What is the primary use of the building?", "", Vec::new()),
        Question::new("q2", "How many storeys does the building have?", "", Vec::new()),
        Question::new("q3", "How many people occupy the building?", "", Vec::new()),
    ]
}

fn answered_first() -> InMemoryGateway {
    InMemoryGateway::new().with_questions(bank()).with_progress(
        UserId::new(TEST_USER),
        ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "office")]),
    )
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_fallback_content() {
    let mut harness = setup_view_harness(ViewKind::Home, &Gateway::in_memory());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Fire Risk Assessment"), "missing hero in {html}");
    assert!(html.contains("Three Simple Steps to Compliance"), "missing steps in {html}");
    assert!(html.contains("Sarah Mitchell"), "missing fallback testimonial in {html}");
    assert!(html.contains("4.9/5"), "missing fallback rating in {html}");
    assert!(
        html.contains("How long does the fire safety assessment take to complete?"),
        "missing faq in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_fetched_content() {
    let repo = InMemoryGateway::new()
        .with_testimonials(vec![Testimonial {
            name: "Priya Shah".to_string(),
            role: "Landlord".to_string(),
            company: "Shah Lettings".to_string(),
            rating: 5.0,
            text: "Painless from start to finish.".to_string(),
            category: "HMO".to_string(),
            initials: None,
        }])
        .with_stats(SiteStats {
            rating: 4.7,
            approval: 96.0,
            compliance: 100.0,
        });
    let mut harness = setup_view_harness(ViewKind::Home, &Gateway::from_in_memory(repo));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Priya Shah"), "missing testimonial in {html}");
    assert!(html.contains("PS"), "missing initials in {html}");
    assert!(!html.contains("Sarah Mitchell"), "fallback still shown in {html}");
    assert!(html.contains("4.7/5"), "missing rating in {html}");
    assert!(html.contains("96%"), "missing approval in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_resumes_at_first_gap() {
    let gateway = Gateway::from_in_memory(answered_first());
    let mut harness = setup_view_harness(ViewKind::Assessment, &gateway);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("UK Fire Safety Assessment"), "missing title in {html}");
    assert!(
        html.contains("Assessment • Building Type • Question 2 of 3"),
        "missing breadcrumb in {html}"
    );
    assert!(html.contains("Question 2 of 3"), "missing card header in {html}");
    assert!(html.contains("Low-rise (2–4 storeys)"), "missing q2 option in {html}");
    assert!(
        html.contains("Progress: 1 of 5 steps completed"),
        "missing stepper footer in {html}"
    );
    assert!(html.contains("Assessment Progress"), "missing progress panel in {html}");
    assert!(html.contains("Medium Risk Level"), "missing summary panel in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_selection_submits_and_advances() {
    let repo = answered_first();
    let gateway = Gateway::from_in_memory(repo.clone());
    let mut harness = setup_view_harness(ViewKind::Assessment, &gateway);
    harness.settle().await;

    harness.dispatch(AssessmentIntent::Select(OptionId::new("high_rise")));
    for _ in 0..4 {
        harness.drive_async().await;
    }

    let submissions = repo.submissions().expect("submissions");
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].question_id.as_str(), "q2");
    assert_eq!(submissions[0].option_id.as_str(), "high_rise");

    let html = harness.render();
    assert!(html.contains("Question 3 of 3"), "did not advance in {html}");
    assert!(html.contains("Complete Assessment"), "missing completion label in {html}");
    assert!(html.contains("High Risk Level"), "risk tone not updated in {html}");

    harness.dispatch(AssessmentIntent::Previous);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "previous did not move back in {html}");
}

struct FailingQuestions;

#[async_trait]
impl QuestionRepository for FailingQuestions {
    async fn list_questions(&self) -> Result<Vec<Question>, GatewayError> {
        Err(GatewayError::Connection("offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_load_error() {
    let mut gateway = Gateway::in_memory();
    gateway.questions = Arc::new(FailingQuestions);
    let mut harness = setup_view_harness(ViewKind::Assessment, &gateway);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("load the assessment"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_complete_view_smoke_pins_stepper() {
    let mut harness = setup_view_harness(ViewKind::AssessmentComplete, &Gateway::in_memory());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Progress: 2 of 5 steps completed"),
        "missing progress in {html}"
    );
    assert!(
        html.contains("Estimated time remaining: 6 minutes"),
        "missing estimate in {html}"
    );
    assert!(html.contains("UK Compliance Certified"), "missing badge in {html}");
    assert!(html.contains("View Assessment Results"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_report() {
    let repo = InMemoryGateway::new()
        .with_report_response(ReportResponse::success("Overall risk: Medium."));
    let mut harness = setup_view_harness(ViewKind::Results, &Gateway::from_in_memory(repo.clone()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Assessment Results"), "missing title in {html}");
    assert!(html.contains("Overall risk: Medium."), "missing report in {html}");
    assert_eq!(
        repo.report_requests().expect("requests"),
        vec![ReportRequest::demonstration()]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_rejection_message() {
    let repo = InMemoryGateway::new()
        .with_report_response(ReportResponse::failure(Some("Quota exceeded".to_string())));
    let mut harness = setup_view_harness(ViewKind::Results, &Gateway::from_in_memory(repo));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quota exceeded"), "missing message in {html}");
}

struct UnreachableReports;

#[async_trait]
impl ReportGateway for UnreachableReports {
    async fn generate_report(
        &self,
        _request: &ReportRequest,
    ) -> Result<ReportResponse, GatewayError> {
        Err(GatewayError::Connection("refused".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_transport_failure() {
    let mut gateway = Gateway::in_memory();
    gateway.reports = Arc::new(UnreachableReports);
    let mut harness = setup_view_harness(ViewKind::Results, &gateway);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Failed to load report"), "missing error in {html}");
}
