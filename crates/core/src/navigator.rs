//! Question navigation state for the assessment flow.
//!
//! All transitions are pure: `transition(state, event) -> (state, effect)`.
//! Remote I/O lives in the services layer, which feeds results back in as
//! events.

use thiserror::Error;

use crate::model::{
    AnswerSubmission, OptionId, ProgressSnapshot, Question, StepProgress, UserId,
    estimated_minutes,
};
use crate::summary::AssessmentSummary;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigatorError {
    #[error("no question at index {index} (question count {count})")]
    NoCurrentQuestion { index: usize, count: usize },
}

/// Inputs to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorEvent {
    /// Initial question list and progress snapshot arrived.
    Loaded {
        questions: Vec<Question>,
        progress: ProgressSnapshot,
    },
    /// An answer for `question_index` was accepted and progress refetched.
    AnswerRecorded {
        question_index: usize,
        progress: ProgressSnapshot,
    },
    Previous,
    Next,
}

/// Side effects the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorEffect {
    NavigateToCompletion,
}

/// A submission built from the current question, not yet sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnswer {
    pub question_index: usize,
    pub submission: AnswerSubmission,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentNavigator {
    questions: Vec<Question>,
    progress: ProgressSnapshot,
    current_index: usize,
    assessment_completed: bool,
}

impl AssessmentNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a navigator positioned on the first unanswered question.
    #[must_use]
    pub fn loaded(questions: Vec<Question>, progress: ProgressSnapshot) -> Self {
        Self::new()
            .transition(NavigatorEvent::Loaded {
                questions,
                progress,
            })
            .0
    }

    #[must_use]
    pub fn transition(mut self, event: NavigatorEvent) -> (Self, Option<NavigatorEffect>) {
        let effect = match event {
            NavigatorEvent::Loaded {
                questions,
                progress,
            } => {
                self.current_index = first_unanswered_index(&questions, &progress);
                self.questions = questions;
                self.progress = progress;
                self.assessment_completed = false;
                None
            }
            NavigatorEvent::AnswerRecorded {
                question_index,
                progress,
            } => {
                self.progress = progress;
                if question_index + 1 >= self.questions.len() {
                    // Last question: wait for the explicit "Complete Assessment" click.
                    self.assessment_completed = true;
                } else {
                    self.current_index = question_index + 1;
                }
                None
            }
            NavigatorEvent::Previous => {
                self.current_index = self.current_index.saturating_sub(1);
                None
            }
            NavigatorEvent::Next => {
                let last = self.last_index();
                if self.current_index >= last {
                    Some(NavigatorEffect::NavigateToCompletion)
                } else {
                    self.current_index = (self.current_index + 1).min(last);
                    None
                }
            }
        };
        (self, effect)
    }

    /// In-place form of [`AssessmentNavigator::transition`].
    pub fn apply(&mut self, event: NavigatorEvent) -> Option<NavigatorEffect> {
        let (next, effect) = std::mem::take(self).transition(event);
        *self = next;
        effect
    }

    pub fn go_to_previous(&mut self) {
        let _ = self.apply(NavigatorEvent::Previous);
    }

    #[must_use]
    pub fn go_to_next(&mut self) -> Option<NavigatorEffect> {
        self.apply(NavigatorEvent::Next)
    }

    /// Prepare the submission for selecting `option_id` on the current question.
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::NoCurrentQuestion` when the list is empty or the
    /// index is out of range.
    pub fn pending_answer(
        &self,
        user_id: &UserId,
        option_id: OptionId,
    ) -> Result<PendingAnswer, NavigatorError> {
        let question = self
            .current_question()
            .ok_or(NavigatorError::NoCurrentQuestion {
                index: self.current_index,
                count: self.questions.len(),
            })?;
        Ok(PendingAnswer {
            question_index: self.current_index,
            submission: AnswerSubmission::selected(
                user_id.clone(),
                question.question_id.clone(),
                option_id,
            ),
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressSnapshot {
        &self.progress
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index >= self.last_index()
    }

    #[must_use]
    pub fn assessment_completed(&self) -> bool {
        self.assessment_completed
    }

    #[must_use]
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary::from_progress(self.questions.len(), &self.progress)
    }

    #[must_use]
    pub fn step_progress(&self) -> StepProgress {
        let summary = self.summary();
        StepProgress::derive(summary.answered, summary.total, self.assessment_completed)
    }

    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        let summary = self.summary();
        estimated_minutes(self.step_progress().active(), summary.answered, summary.total)
    }

    // An empty list still treats index 0 as the last position.
    fn last_index(&self) -> usize {
        self.questions.len().max(1) - 1
    }
}

fn first_unanswered_index(questions: &[Question], progress: &ProgressSnapshot) -> usize {
    let answered = progress.answered_ids();
    questions
        .iter()
        .position(|question| !answered.contains(&question.question_id))
        .unwrap_or(0)
}
