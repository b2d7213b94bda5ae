/// Number of stages in the assessment journey.
pub const STEP_COUNT: usize = 5;

/// Estimated minutes shown whenever the flow is not on the questions step.
pub const FALLBACK_ESTIMATED_MINUTES: u32 = 6;

/// Estimated minutes per unanswered question.
pub const MINUTES_PER_QUESTION: u32 = 2;

/// The five ordinal stages of the assessment journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssessmentStep {
    Welcome,
    Questions,
    Complete,
    Results,
    ReportPreview,
}

impl AssessmentStep {
    pub const ALL: [Self; STEP_COUNT] = [
        Self::Welcome,
        Self::Questions,
        Self::Complete,
        Self::Results,
        Self::ReportPreview,
    ];

    /// 1-based position in the journey.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Welcome => 1,
            Self::Questions => 2,
            Self::Complete => 3,
            Self::Results => 4,
            Self::ReportPreview => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Questions => "Fire Safety Questions",
            Self::Complete => "Assessment Complete",
            Self::Results => "Assessment Results",
            Self::ReportPreview => "PDF Report Preview",
        }
    }

    #[must_use]
    pub fn sub_label(self) -> &'static str {
        match self {
            Self::Welcome => "Step 1",
            Self::Questions => "Step 2",
            Self::Complete => "Step 3",
            Self::Results => "Step 4",
            Self::ReportPreview => "Step 5",
        }
    }
}

/// Icon tag a stepper stage shows while it is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepIcon {
    Check,
    Chart,
    Document,
    Plus,
}

impl StepIcon {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Chart => "chart",
            Self::Document => "document",
            Self::Plus => "plus",
        }
    }
}

/// A stage as configured for one page's stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub step: AssessmentStep,
    pub icon: Option<StepIcon>,
}

impl StepDefinition {
    /// Stages as shown on the question flow.
    #[must_use]
    pub fn assessment_flow() -> [Self; STEP_COUNT] {
        [
            Self::plain(AssessmentStep::Welcome),
            Self::plain(AssessmentStep::Questions),
            Self::with_icon(AssessmentStep::Complete, StepIcon::Plus),
            Self::with_icon(AssessmentStep::Results, StepIcon::Chart),
            Self::with_icon(AssessmentStep::ReportPreview, StepIcon::Document),
        ]
    }

    /// Stages as shown on the assessment-complete page.
    #[must_use]
    pub fn completion_page() -> [Self; STEP_COUNT] {
        [
            Self::plain(AssessmentStep::Welcome),
            Self::plain(AssessmentStep::Questions),
            Self::plain(AssessmentStep::Complete),
            Self::with_icon(AssessmentStep::Results, StepIcon::Chart),
            Self::with_icon(AssessmentStep::ReportPreview, StepIcon::Document),
        ]
    }

    const fn plain(step: AssessmentStep) -> Self {
        Self { step, icon: None }
    }

    const fn with_icon(step: AssessmentStep, icon: StepIcon) -> Self {
        Self {
            step,
            icon: Some(icon),
        }
    }
}

/// Active stage plus the stages counted as completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepProgress {
    active: AssessmentStep,
    completed: Vec<AssessmentStep>,
}

impl StepProgress {
    /// Derive the stage from answer coverage and the explicit completion flag.
    ///
    /// Steps 4 and 5 are never produced here; they belong to other pages.
    #[must_use]
    pub fn derive(answered: usize, total: usize, assessment_completed: bool) -> Self {
        if answered == 0 {
            return Self::fixed(AssessmentStep::Welcome, Vec::new());
        }
        if answered < total {
            return Self::fixed(AssessmentStep::Questions, vec![AssessmentStep::Welcome]);
        }

        let completed = vec![AssessmentStep::Welcome, AssessmentStep::Questions];
        if assessment_completed {
            Self::fixed(AssessmentStep::Complete, completed)
        } else {
            Self::fixed(AssessmentStep::Questions, completed)
        }
    }

    /// A progress value pinned by a page rather than derived from answers.
    #[must_use]
    pub fn fixed(active: AssessmentStep, completed: Vec<AssessmentStep>) -> Self {
        Self { active, completed }
    }

    #[must_use]
    pub fn active(&self) -> AssessmentStep {
        self.active
    }

    #[must_use]
    pub fn completed(&self) -> &[AssessmentStep] {
        &self.completed
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

/// Minutes left in the flow as shown under the stepper.
///
/// Only counts down while questions remain open; a fully answered bank shows
/// the fixed estimate whether or not completion has been confirmed.
#[must_use]
pub fn estimated_minutes(active: AssessmentStep, answered: usize, total: usize) -> u32 {
    if active != AssessmentStep::Questions || answered >= total {
        return FALLBACK_ESTIMATED_MINUTES;
    }
    let remaining = total.saturating_sub(answered).max(1);
    u32::try_from(remaining)
        .unwrap_or(u32::MAX)
        .saturating_mul(MINUTES_PER_QUESTION)
}
