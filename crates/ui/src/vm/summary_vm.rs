use nfrpr_core::model::{ProgressSnapshot, Question, RiskLevel};
use nfrpr_core::{AssessmentSummary, CategoryProgress, CategoryStatus, RiskOverview};

pub const COMPLIANCE_TEXT: &str = "UK Fire Safety Regulations 2005 Compliant";

const REGULATION_LINKS: [&str; 2] = [
    "UK Fire Safety Regulation 2005",
    "Building Regulations: Approved Doc B",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRowVm {
    pub title: String,
    pub counts: String,
    pub status: CategoryStatus,
}

impl CategoryRowVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            CategoryStatus::Completed => "category completed",
            CategoryStatus::InProgress => "category in-progress",
            CategoryStatus::Pending => "category pending",
        }
    }
}

impl From<&CategoryProgress> for CategoryRowVm {
    fn from(row: &CategoryProgress) -> Self {
        Self {
            title: row.title.clone(),
            counts: format!("{}/{}", row.completed, row.total),
            status: row.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressPanelVm {
    pub percent: u32,
    pub categories: Vec<CategoryRowVm>,
    pub compliance_text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStatVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryPanelVm {
    pub answered: usize,
    pub remaining: usize,
    pub percent: u32,
    pub risk_level: RiskLevel,
    pub stats: Vec<QuickStatVm>,
    pub links: Vec<&'static str>,
}

impl SummaryPanelVm {
    #[must_use]
    pub fn risk_label(&self) -> &'static str {
        match self.risk_level {
            RiskLevel::Low => "Low Risk Level",
            RiskLevel::Medium => "Medium Risk Level",
            RiskLevel::High => "High Risk Level",
        }
    }

    #[must_use]
    pub fn risk_class(&self) -> &'static str {
        match self.risk_level {
            RiskLevel::Low => "risk-tone low",
            RiskLevel::Medium => "risk-tone medium",
            RiskLevel::High => "risk-tone high",
        }
    }
}

#[must_use]
pub fn map_progress_panel(questions: &[Question], progress: &ProgressSnapshot) -> ProgressPanelVm {
    let summary = AssessmentSummary::from_progress(questions.len(), progress);
    ProgressPanelVm {
        percent: summary.clamped_percent(),
        categories: CategoryProgress::collect(questions, progress)
            .iter()
            .map(CategoryRowVm::from)
            .collect(),
        compliance_text: COMPLIANCE_TEXT,
    }
}

#[must_use]
pub fn map_summary_panel(questions: &[Question], progress: &ProgressSnapshot) -> SummaryPanelVm {
    let summary = AssessmentSummary::from_progress(questions.len(), progress);
    let overview = RiskOverview::assess(questions, progress);
    let compliance = if overview.flagged == 0 {
        "Compliant"
    } else {
        "Review required"
    };

    SummaryPanelVm {
        answered: summary.answered,
        remaining: summary.remaining(),
        percent: summary.clamped_percent(),
        risk_level: overview.level,
        stats: vec![
            QuickStatVm {
                label: "Questions answered",
                value: summary.answered.to_string(),
            },
            QuickStatVm {
                label: "Compliance status",
                value: compliance.to_string(),
            },
            QuickStatVm {
                label: "Risk categories flagged",
                value: overview.flagged.to_string(),
            },
            QuickStatVm {
                label: "Items needing review",
                value: overview.needing_review.to_string(),
            },
        ],
        links: REGULATION_LINKS.to_vec(),
    }
}
