use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{OptionId, QuestionId};

/// Display-only risk classification attached to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Option as delivered by the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOption {
    pub id: OptionId,
    #[serde(default)]
    pub text: String,
}

impl RawOption {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
        }
    }
}

/// A question as served by `GET /api/questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: QuestionId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

impl Question {
    #[must_use]
    pub fn new(
        question_id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
        options: Vec<RawOption>,
    ) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            text: text.into(),
            category: category.into(),
            options,
        }
    }
}
