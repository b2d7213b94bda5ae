use crate::model::{ProgressSnapshot, Question, RiskLevel};
use crate::presentation::build_presentation;

/// Answer coverage across the question bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssessmentSummary {
    pub total: usize,
    pub answered: usize,
    pub percent: u32,
}

impl AssessmentSummary {
    #[must_use]
    pub fn from_progress(total: usize, progress: &ProgressSnapshot) -> Self {
        let answered = progress.answered_count();
        Self {
            total,
            answered,
            percent: rounded_percent(answered, total),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    /// Percent for progress bars, never above 100.
    #[must_use]
    pub fn clamped_percent(&self) -> u32 {
        self.percent.min(100)
    }
}

// Half rounds up, matching `Math.round` on non-negative input.
fn rounded_percent(answered: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = (answered.saturating_mul(200) + total) / (2 * total);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    Completed,
    InProgress,
    Pending,
}

impl CategoryStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub title: String,
    pub completed: usize,
    pub total: usize,
    pub status: CategoryStatus,
}

impl CategoryProgress {
    /// Group questions by presented category label, in first-appearance order.
    #[must_use]
    pub fn collect(questions: &[Question], progress: &ProgressSnapshot) -> Vec<Self> {
        let mut rows: Vec<Self> = Vec::new();
        for question in questions {
            let title = build_presentation(question).category_label;
            let answered = usize::from(progress.is_answered(&question.question_id));
            match rows.iter_mut().find(|row| row.title == title) {
                Some(row) => {
                    row.total += 1;
                    row.completed += answered;
                }
                None => rows.push(Self {
                    title,
                    completed: answered,
                    total: 1,
                    status: CategoryStatus::Pending,
                }),
            }
        }
        for row in &mut rows {
            row.status = if row.completed >= row.total {
                CategoryStatus::Completed
            } else if row.completed > 0 {
                CategoryStatus::InProgress
            } else {
                CategoryStatus::Pending
            };
        }
        rows
    }
}

/// Risk tone and quick stats for the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskOverview {
    pub level: RiskLevel,
    pub flagged: usize,
    pub needing_review: usize,
}

impl RiskOverview {
    #[must_use]
    pub fn assess(questions: &[Question], progress: &ProgressSnapshot) -> Self {
        let mut highest: Option<RiskLevel> = None;
        let mut flagged = 0;

        for question in questions {
            let Some(selected) = progress.selected_option(&question.question_id) else {
                continue;
            };
            let presentation = build_presentation(question);
            let Some(tier) = presentation
                .option(selected)
                .and_then(|option| option.risk_level)
            else {
                continue;
            };
            if tier == RiskLevel::High {
                flagged += 1;
            }
            highest = highest.max(Some(tier));
        }

        Self {
            level: highest.unwrap_or(RiskLevel::Medium),
            flagged,
            needing_review: AssessmentSummary::from_progress(questions.len(), progress)
                .remaining(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProgressAnswer;

    fn standard_bank() -> Vec<Question> {
        (1..=8)
            .map(|n| Question::new(format!("q{n}"), format!("Question {n}"), "", Vec::new()))
            .collect()
    }

    #[test]
    fn percent_rounds_half_up() {
        let progress = ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "a")]);
        assert_eq!(AssessmentSummary::from_progress(8, &progress).percent, 13);
        assert_eq!(AssessmentSummary::from_progress(3, &progress).percent, 33);
        assert_eq!(AssessmentSummary::from_progress(2, &progress).percent, 50);
    }

    #[test]
    fn empty_bank_is_zero_percent() {
        let summary = AssessmentSummary::from_progress(0, &ProgressSnapshot::default());
        assert_eq!(summary.percent, 0);
        assert_eq!(summary.remaining(), 0);
    }

    #[test]
    fn remaining_saturates_when_progress_outgrows_bank() {
        let progress = ProgressSnapshot::new(vec![
            ProgressAnswer::selected("q1", "a"),
            ProgressAnswer::selected("q2", "a"),
            ProgressAnswer::selected("q3", "a"),
        ]);
        let summary = AssessmentSummary::from_progress(2, &progress);
        assert_eq!(summary.remaining(), 0);
        assert_eq!(summary.percent, 150);
        assert_eq!(summary.clamped_percent(), 100);
    }

    #[test]
    fn categories_follow_presented_labels_in_order() {
        let progress = ProgressSnapshot::new(vec![
            ProgressAnswer::selected("q1", "office"),
            ProgressAnswer::selected("q2", "low_rise"),
            ProgressAnswer::selected("q4", "smoke"),
        ]);
        let rows = CategoryProgress::collect(&standard_bank(), &progress);
        let titles = rows.iter().map(|row| row.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Building Information",
                "Occupancy Assessment",
                "Fire Safety Systems",
                "Means of Escape",
                "Fire Safety Management",
                "Vulnerable Persons",
                "Fire Hazards",
            ]
        );
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].status, CategoryStatus::Completed);
        assert_eq!(rows[1].status, CategoryStatus::Pending);
        assert_eq!(rows[2].status, CategoryStatus::Completed);
    }

    #[test]
    fn partially_answered_category_is_in_progress() {
        let progress = ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "office")]);
        let rows = CategoryProgress::collect(&standard_bank(), &progress);
        assert_eq!(rows[0].completed, 1);
        assert_eq!(rows[0].status, CategoryStatus::InProgress);
    }

    #[test]
    fn risk_defaults_to_medium_without_answers() {
        let overview = RiskOverview::assess(&standard_bank(), &ProgressSnapshot::default());
        assert_eq!(overview.level, RiskLevel::Medium);
        assert_eq!(overview.flagged, 0);
        assert_eq!(overview.needing_review, 8);
    }

    #[test]
    fn risk_takes_highest_selected_tier() {
        let progress = ProgressSnapshot::new(vec![
            ProgressAnswer::selected("q1", "single"),
            ProgressAnswer::selected("q2", "high_rise"),
            ProgressAnswer::selected("q8", "heating"),
        ]);
        let overview = RiskOverview::assess(&standard_bank(), &progress);
        assert_eq!(overview.level, RiskLevel::High);
        assert_eq!(overview.flagged, 2);
        assert_eq!(overview.needing_review, 5);

        let low = ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "single")]);
        assert_eq!(
            RiskOverview::assess(&standard_bank(), &low).level,
            RiskLevel::Low
        );
    }

    #[test]
    fn unknown_options_do_not_affect_risk() {
        let progress = ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "castle")]);
        let overview = RiskOverview::assess(&standard_bank(), &progress);
        assert_eq!(overview.level, RiskLevel::Medium);
        assert_eq!(overview.needing_review, 7);
    }
}
