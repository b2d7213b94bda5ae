use serde::{Deserialize, Serialize};

use crate::model::{ProgressAnswer, Question};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub answered: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighLevelSummary {
    pub overall_risk_category: String,
    pub percent_score: u32,
    pub meta: ReportMeta,
}

/// Body of `POST /api/reports/gemini`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub summary: ReportSummary,
    pub high_level: HighLevelSummary,
    pub answers: Vec<ProgressAnswer>,
    pub questions: Vec<Question>,
}

impl ReportRequest {
    /// Fixed placeholder payload sent by the results page.
    ///
    /// It does not reflect the user's real progress.
    #[must_use]
    pub fn demonstration() -> Self {
        Self {
            summary: ReportSummary {
                answered: 8,
                total: 8,
                percent: 72,
            },
            high_level: HighLevelSummary {
                overall_risk_category: "Medium Risk".to_string(),
                percent_score: 72,
                meta: ReportMeta {
                    site: "Demo Site".to_string(),
                },
            },
            answers: Vec::new(),
            questions: Vec::new(),
        }
    }
}

/// Reply from the report endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReportResponse {
    #[must_use]
    pub fn success(report: impl Into<String>) -> Self {
        Self {
            ok: true,
            report: Some(report.into()),
            message: None,
        }
    }

    #[must_use]
    pub fn failure(message: Option<String>) -> Self {
        Self {
            ok: false,
            report: None,
            message,
        }
    }
}
