use std::sync::Arc;

use gateway::{ProgressRepository, QuestionRepository};
use nfrpr_core::model::{OptionId, ProgressSnapshot, UserId};
use nfrpr_core::{AssessmentNavigator, NavigatorEvent, PendingAnswer};
use tracing::{debug, info};

use crate::error::AssessmentError;

/// Result of selecting an option on the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub question_index: usize,
    pub current_index: usize,
    pub assessment_completed: bool,
}

/// Orchestrates loading the bank and recording answers against the remote store.
#[derive(Clone)]
pub struct AssessmentLoopService {
    user_id: UserId,
    questions: Arc<dyn QuestionRepository>,
    progress: Arc<dyn ProgressRepository>,
}

impl AssessmentLoopService {
    #[must_use]
    pub fn new(
        user_id: UserId,
        questions: Arc<dyn QuestionRepository>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            user_id,
            questions,
            progress,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Fetch questions and progress concurrently and position on the first gap.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Gateway` if either fetch fails.
    pub async fn start(&self) -> Result<AssessmentNavigator, AssessmentError> {
        let (questions, progress) = tokio::try_join!(
            self.questions.list_questions(),
            self.progress.get_progress(&self.user_id),
        )?;
        let navigator = AssessmentNavigator::loaded(questions, progress);
        info!(
            user = %self.user_id,
            questions = navigator.question_count(),
            answered = navigator.summary().answered,
            start_index = navigator.current_index(),
            "assessment loaded"
        );
        Ok(navigator)
    }

    /// Fetch the latest snapshot for the configured user.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Gateway` if the fetch fails.
    pub async fn refresh_progress(&self) -> Result<ProgressSnapshot, AssessmentError> {
        Ok(self.progress.get_progress(&self.user_id).await?)
    }

    /// Submit a prepared answer and refetch progress.
    ///
    /// The returned event carries the question index captured when the answer
    /// was prepared, so a navigation that happened in between is overridden.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Gateway` if the submission or the refetch fails.
    pub async fn record(&self, pending: &PendingAnswer) -> Result<NavigatorEvent, AssessmentError> {
        self.progress.submit_answer(&pending.submission).await?;
        let progress = self.refresh_progress().await?;
        debug!(
            question = %pending.submission.question_id,
            option = %pending.submission.option_id,
            answered = progress.answered_count(),
            "answer recorded"
        );
        Ok(NavigatorEvent::AnswerRecorded {
            question_index: pending.question_index,
            progress,
        })
    }

    /// Select an option on the navigator's current question.
    ///
    /// On failure the navigator is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Navigator` when there is no current question,
    /// or `AssessmentError::Gateway` for remote failures.
    pub async fn select_option(
        &self,
        navigator: &mut AssessmentNavigator,
        option_id: OptionId,
    ) -> Result<SelectionOutcome, AssessmentError> {
        let pending = navigator.pending_answer(&self.user_id, option_id)?;
        let event = self.record(&pending).await?;
        let _ = navigator.apply(event);
        if navigator.assessment_completed() {
            info!(user = %self.user_id, "all questions answered");
        }
        Ok(SelectionOutcome {
            question_index: pending.question_index,
            current_index: navigator.current_index(),
            assessment_completed: navigator.assessment_completed(),
        })
    }
}
