use nfrpr_core::model::{STEP_COUNT, StepDefinition, StepIcon, StepProgress};

pub const CERTIFICATION_BADGE: &str = "UK Compliance Certified";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl StepStatus {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "step completed",
            Self::Current => "step current",
            Self::Pending => "step pending",
        }
    }
}

/// What the step circle shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepGlyph {
    Check,
    Icon(StepIcon),
    Number(u8),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub number: u8,
    pub label: &'static str,
    pub sub_label: &'static str,
    pub status: StepStatus,
    pub glyph: StepGlyph,
    /// `Some(highlighted)` for every step but the last.
    pub connector: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepperVm {
    pub steps: Vec<StepVm>,
    pub progress_label: String,
    pub time_label: String,
    pub badge: &'static str,
}

#[must_use]
pub fn map_stepper(
    definitions: &[StepDefinition],
    progress: &StepProgress,
    estimated_minutes: u32,
) -> StepperVm {
    let active = progress.active();
    let last = definitions.len().saturating_sub(1);
    let steps = definitions
        .iter()
        .enumerate()
        .map(|(index, definition)| {
            let status = if definition.step < active {
                StepStatus::Completed
            } else if definition.step == active {
                StepStatus::Current
            } else {
                StepStatus::Pending
            };
            let glyph = match (status, definition.icon) {
                (StepStatus::Completed | StepStatus::Current, _) => StepGlyph::Check,
                (StepStatus::Pending, Some(icon)) => StepGlyph::Icon(icon),
                (StepStatus::Pending, None) => StepGlyph::Number(definition.step.number()),
            };
            StepVm {
                number: definition.step.number(),
                label: definition.step.label(),
                sub_label: definition.step.sub_label(),
                status,
                glyph,
                connector: (index < last).then_some(status == StepStatus::Completed),
            }
        })
        .collect();

    StepperVm {
        steps,
        progress_label: format!(
            "Progress: {} of {STEP_COUNT} steps completed",
            progress.completed_count()
        ),
        time_label: format!("Estimated time remaining: {estimated_minutes} minutes"),
        badge: CERTIFICATION_BADGE,
    }
}

#[cfg(test)]
mod tests {
    use nfrpr_core::model::AssessmentStep;

    use super::*;

    #[test]
    fn statuses_follow_active_step() {
        let progress = StepProgress::fixed(AssessmentStep::Questions, vec![AssessmentStep::Welcome]);
        let vm = map_stepper(&StepDefinition::assessment_flow(), &progress, 8);

        let statuses = vm.steps.iter().map(|step| step.status).collect::<Vec<_>>();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Current,
                StepStatus::Pending,
                StepStatus::Pending,
                StepStatus::Pending,
            ]
        );
        assert_eq!(vm.progress_label, "Progress: 1 of 5 steps completed");
        assert_eq!(vm.time_label, "Estimated time remaining: 8 minutes");
    }

    #[test]
    fn glyph_prefers_check_then_icon_then_number() {
        let progress = StepProgress::fixed(AssessmentStep::Welcome, Vec::new());
        let vm = map_stepper(&StepDefinition::assessment_flow(), &progress, 6);

        assert_eq!(vm.steps[0].glyph, StepGlyph::Check);
        assert_eq!(vm.steps[1].glyph, StepGlyph::Number(2));
        assert_eq!(vm.steps[2].glyph, StepGlyph::Icon(StepIcon::Plus));
        assert_eq!(vm.steps[4].glyph, StepGlyph::Icon(StepIcon::Document));
    }

    #[test]
    fn connectors_skip_last_step_and_light_up_when_completed() {
        let progress = StepProgress::fixed(
            AssessmentStep::Complete,
            vec![AssessmentStep::Welcome, AssessmentStep::Questions],
        );
        let vm = map_stepper(&StepDefinition::completion_page(), &progress, 6);

        let connectors = vm.steps.iter().map(|step| step.connector).collect::<Vec<_>>();
        assert_eq!(
            connectors,
            vec![Some(true), Some(true), Some(false), Some(false), None]
        );
        assert_eq!(vm.steps[2].glyph, StepGlyph::Check);
        assert_eq!(vm.progress_label, "Progress: 2 of 5 steps completed");
    }
}
