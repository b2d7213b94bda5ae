use std::sync::Arc;

use async_trait::async_trait;
use gateway::{Gateway, GatewayError, InMemoryGateway, ProgressRepository};
use nfrpr_core::model::{
    AnswerSubmission, AssessmentStep, OptionId, ProgressAnswer, ProgressSnapshot, Question,
    QuestionId, RawOption, UserId,
};
use nfrpr_core::{NavigatorEffect, NavigatorEvent};
use services::{AppServices, AssessmentError, AssessmentLoopService};

fn bank(count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| {
            Question::new(
                format!("q{n}"),
                format!("Question {n}"),
                "Building Information",
                vec![RawOption::new("a", "A"), RawOption::new("b", "B")],
            )
        })
        .collect()
}

fn user() -> UserId {
    UserId::new("demo-user")
}

#[tokio::test]
async fn answering_every_question_reaches_completion() {
    let repo = InMemoryGateway::new().with_questions(bank(3));
    let services = AppServices::from_gateway(user(), &Gateway::from_in_memory(repo.clone()));
    let assessment = services.assessment();

    let mut navigator = assessment.start().await.unwrap();
    assert_eq!(navigator.current_index(), 0);
    assert_eq!(navigator.step_progress().active(), AssessmentStep::Welcome);

    for expected in 0..3 {
        let outcome = assessment
            .select_option(&mut navigator, OptionId::new("a"))
            .await
            .unwrap();
        assert_eq!(outcome.question_index, expected);
    }

    assert!(navigator.assessment_completed());
    assert_eq!(navigator.current_index(), 2);
    assert_eq!(navigator.summary().answered, 3);
    assert_eq!(navigator.step_progress().active(), AssessmentStep::Complete);
    assert_eq!(
        navigator.go_to_next(),
        Some(NavigatorEffect::NavigateToCompletion)
    );
    assert_eq!(repo.submissions().unwrap().len(), 3);
}

#[tokio::test]
async fn resumes_at_first_unanswered_question() {
    let repo = InMemoryGateway::new().with_questions(bank(4)).with_progress(
        user(),
        ProgressSnapshot::new(vec![
            ProgressAnswer::selected("q1", "a"),
            ProgressAnswer::selected("q2", "b"),
        ]),
    );
    let assessment = AppServices::from_gateway(user(), &Gateway::from_in_memory(repo)).assessment();

    let navigator = assessment.start().await.unwrap();
    assert_eq!(navigator.current_index(), 2);
    assert_eq!(navigator.step_progress().active(), AssessmentStep::Questions);
    assert_eq!(navigator.estimated_minutes(), 4);
}

#[tokio::test]
async fn reselecting_an_answered_question_keeps_count() {
    let repo = InMemoryGateway::new()
        .with_questions(bank(3))
        .with_progress(user(), ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "a")]));
    let assessment = AppServices::from_gateway(user(), &Gateway::from_in_memory(repo)).assessment();

    let mut navigator = assessment.start().await.unwrap();
    navigator.go_to_previous();
    assert_eq!(navigator.current_index(), 0);

    let outcome = assessment
        .select_option(&mut navigator, OptionId::new("b"))
        .await
        .unwrap();
    assert_eq!(outcome.current_index, 1);
    assert_eq!(navigator.summary().answered, 1);
    assert_eq!(
        navigator.progress().selected_option(&QuestionId::new("q1")),
        Some(&OptionId::new("b"))
    );
}

#[tokio::test]
async fn recorded_event_uses_index_captured_at_selection() {
    let repo = InMemoryGateway::new().with_questions(bank(4));
    let assessment = AppServices::from_gateway(user(), &Gateway::from_in_memory(repo)).assessment();

    let mut navigator = assessment.start().await.unwrap();
    let pending = navigator
        .pending_answer(assessment.user_id(), OptionId::new("a"))
        .unwrap();

    // The user moves on while the submission is in flight.
    let _ = navigator.go_to_next();
    let _ = navigator.go_to_next();
    assert_eq!(navigator.current_index(), 2);

    let event = assessment.record(&pending).await.unwrap();
    assert!(matches!(
        event,
        NavigatorEvent::AnswerRecorded {
            question_index: 0,
            ..
        }
    ));
    let _ = navigator.apply(event);
    assert_eq!(navigator.current_index(), 1);
}

#[tokio::test]
async fn empty_bank_cannot_accept_answers() {
    let assessment =
        AppServices::from_gateway(user(), &Gateway::from_in_memory(InMemoryGateway::new()))
            .assessment();
    let mut navigator = assessment.start().await.unwrap();
    let err = assessment
        .select_option(&mut navigator, OptionId::new("a"))
        .await
        .unwrap_err();
    assert!(matches!(err, AssessmentError::Navigator(_)));
}

struct RejectingProgress {
    inner: InMemoryGateway,
}

#[async_trait]
impl ProgressRepository for RejectingProgress {
    async fn get_progress(&self, user_id: &UserId) -> Result<ProgressSnapshot, GatewayError> {
        self.inner.get_progress(user_id).await
    }

    async fn submit_answer(&self, _submission: &AnswerSubmission) -> Result<(), GatewayError> {
        Err(GatewayError::Connection("connection refused".into()))
    }
}

#[tokio::test]
async fn failed_submission_leaves_navigator_untouched() {
    let repo = InMemoryGateway::new().with_questions(bank(3));
    let assessment = AssessmentLoopService::new(
        user(),
        Arc::new(repo.clone()),
        Arc::new(RejectingProgress { inner: repo }),
    );

    let mut navigator = assessment.start().await.unwrap();
    let before = navigator.clone();
    let err = assessment
        .select_option(&mut navigator, OptionId::new("a"))
        .await
        .unwrap_err();
    assert!(matches!(err, AssessmentError::Gateway(_)));
    assert_eq!(navigator, before);
}

struct OfflineProgress;

#[async_trait]
impl ProgressRepository for OfflineProgress {
    async fn get_progress(&self, _user_id: &UserId) -> Result<ProgressSnapshot, GatewayError> {
        Err(GatewayError::Connection("offline".into()))
    }

    async fn submit_answer(&self, _submission: &AnswerSubmission) -> Result<(), GatewayError> {
        Err(GatewayError::Connection("offline".into()))
    }
}

#[tokio::test]
async fn start_fails_when_progress_is_unreachable() {
    let repo = InMemoryGateway::new().with_questions(bank(3));
    let assessment = AssessmentLoopService::new(user(), Arc::new(repo), Arc::new(OfflineProgress));
    assert!(matches!(
        assessment.start().await,
        Err(AssessmentError::Gateway(GatewayError::Connection(_)))
    ));
}
