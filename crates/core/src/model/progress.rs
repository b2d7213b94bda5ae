use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{OptionId, QuestionId, UserId};

/// State tag carried on every answer record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerState {
    #[default]
    Selected,
}

/// One entry of a progress snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAnswer {
    pub question_id: QuestionId,
    pub option_id: OptionId,
    #[serde(default)]
    pub state: AnswerState,
}

impl ProgressAnswer {
    #[must_use]
    pub fn selected(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            option_id: OptionId::new(option_id),
            state: AnswerState::Selected,
        }
    }
}

/// Server-held record of which questions a user has answered.
///
/// The remote service is the source of truth; a snapshot is always replaced
/// wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub answers: Vec<ProgressAnswer>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new(answers: Vec<ProgressAnswer>) -> Self {
        Self { answers }
    }

    #[must_use]
    pub fn answered_ids(&self) -> HashSet<&QuestionId> {
        self.answers.iter().map(|answer| &answer.question_id).collect()
    }

    /// Number of distinct answered questions.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered_ids().len()
    }

    #[must_use]
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.answers
            .iter()
            .any(|answer| &answer.question_id == question_id)
    }

    /// The most recent option recorded for a question.
    #[must_use]
    pub fn selected_option(&self, question_id: &QuestionId) -> Option<&OptionId> {
        self.answers
            .iter()
            .rev()
            .find(|answer| &answer.question_id == question_id)
            .map(|answer| &answer.option_id)
    }
}

/// Body of `POST /api/questions/progress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub user_id: UserId,
    pub question_id: QuestionId,
    pub option_id: OptionId,
    pub state: AnswerState,
}

impl AnswerSubmission {
    #[must_use]
    pub fn selected(user_id: UserId, question_id: QuestionId, option_id: OptionId) -> Self {
        Self {
            user_id,
            question_id,
            option_id,
            state: AnswerState::Selected,
        }
    }

    #[must_use]
    pub fn as_progress_answer(&self) -> ProgressAnswer {
        ProgressAnswer {
            question_id: self.question_id.clone(),
            option_id: self.option_id.clone(),
            state: self.state,
        }
    }
}
