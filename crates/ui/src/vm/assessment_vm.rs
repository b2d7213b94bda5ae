use nfrpr_core::model::{OptionId, RiskLevel, StepDefinition};
use nfrpr_core::{AssessmentNavigator, OptionState, PresentedOption, build_presentation};

use super::stepper_vm::{StepperVm, map_stepper};
use super::summary_vm::{ProgressPanelVm, SummaryPanelVm, map_progress_panel, map_summary_panel};

pub const PAGE_TITLE: &str = "UK Fire Safety Assessment";
pub const PAGE_SUBTITLE: &str = "Complete this comprehensive questionnaire to assess your building’s fire safety compliance with UK regulations and identify areas for improvement.";

pub const NEXT_LABEL: &str = "Next Question";
pub const COMPLETE_LABEL: &str = "Complete Assessment";

// Shown in the breadcrumb before the bank has loaded.
const PLACEHOLDER_TOTAL: usize = 8;

/// User intents raised by the question card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Select(OptionId),
    Previous,
    Next,
    /// Answers are persisted on selection, so this has nothing left to do.
    Save,
}

/// An option picked on the card, remembered until the question changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalSelection {
    pub question_index: usize,
    pub option_id: OptionId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    pub title: String,
    pub description: Option<String>,
    pub state: OptionState,
    pub risk_level: Option<RiskLevel>,
    pub tags: Vec<String>,
    pub selected: bool,
}

impl OptionVm {
    fn from_presented(option: PresentedOption, selected: Option<&OptionId>) -> Self {
        let selected = selected == Some(&option.id);
        Self {
            id: option.id,
            title: option.title,
            description: option.description,
            state: option.state,
            risk_level: option.risk_level,
            tags: option.tags,
            selected,
        }
    }

    #[must_use]
    pub fn class(&self) -> String {
        let state = match self.state {
            OptionState::Default => "default",
            OptionState::Warning => "warning",
            OptionState::Invalid => "invalid",
        };
        if self.selected {
            format!("option {state} selected")
        } else {
            format!("option {state}")
        }
    }

    #[must_use]
    pub fn risk_badge(&self) -> Option<String> {
        self.risk_level.map(|tier| format!("{tier} Risk"))
    }

    #[must_use]
    pub fn risk_class(&self) -> &'static str {
        match self.risk_level {
            Some(RiskLevel::Low) => "risk-badge low",
            Some(RiskLevel::Medium) => "risk-badge medium",
            Some(RiskLevel::High) => "risk-badge high",
            None => "risk-badge",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub question_index: usize,
    pub question_number: usize,
    pub total_questions: usize,
    pub question_text: String,
    pub category_label: String,
    pub subtitle: String,
    pub context_title: String,
    pub context_body: String,
    pub note: Option<String>,
    pub options: Vec<OptionVm>,
    pub next_enabled: bool,
    pub next_label: &'static str,
}

impl QuestionCardVm {
    #[must_use]
    pub fn header(&self) -> String {
        format!(
            "Question {} of {}",
            self.question_number, self.total_questions
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentPageVm {
    pub breadcrumb: String,
    pub card: Option<QuestionCardVm>,
    pub stepper: StepperVm,
    pub progress: ProgressPanelVm,
    pub summary: SummaryPanelVm,
}

/// The card for the current question; `None` when the bank is empty.
///
/// A local selection only counts while it belongs to the current question.
/// Without one, the option already stored in progress is preselected.
#[must_use]
pub fn map_question_card(
    navigator: &AssessmentNavigator,
    local: Option<&LocalSelection>,
) -> Option<QuestionCardVm> {
    let question = navigator.current_question()?;
    let index = navigator.current_index();
    let presentation = build_presentation(question);

    let selected = local
        .filter(|selection| selection.question_index == index)
        .map(|selection| &selection.option_id)
        .or_else(|| navigator.progress().selected_option(&question.question_id));

    Some(QuestionCardVm {
        question_index: index,
        question_number: index + 1,
        total_questions: navigator.question_count(),
        question_text: question.text.clone(),
        category_label: presentation.category_label,
        subtitle: presentation.subtitle,
        context_title: presentation.context_title,
        context_body: presentation.context_body,
        note: presentation.note,
        next_enabled: selected.is_some(),
        options: presentation
            .options
            .into_iter()
            .map(|option| OptionVm::from_presented(option, selected))
            .collect(),
        next_label: if navigator.is_last() {
            COMPLETE_LABEL
        } else {
            NEXT_LABEL
        },
    })
}

#[must_use]
pub fn breadcrumb(navigator: &AssessmentNavigator) -> String {
    let count = navigator.question_count();
    let number = (navigator.current_index() + 1).min(count).max(1);
    let total = if count == 0 { PLACEHOLDER_TOTAL } else { count };
    format!("Assessment • Building Type • Question {number} of {total}")
}

#[must_use]
pub fn map_assessment_page(
    navigator: &AssessmentNavigator,
    local: Option<&LocalSelection>,
) -> AssessmentPageVm {
    AssessmentPageVm {
        breadcrumb: breadcrumb(navigator),
        card: map_question_card(navigator, local),
        stepper: map_stepper(
            &StepDefinition::assessment_flow(),
            &navigator.step_progress(),
            navigator.estimated_minutes(),
        ),
        progress: map_progress_panel(navigator.questions(), navigator.progress()),
        summary: map_summary_panel(navigator.questions(), navigator.progress()),
    }
}

#[cfg(test)]
mod tests {
    use nfrpr_core::model::{ProgressAnswer, ProgressSnapshot, Question, RawOption};

    use super::*;

    fn bank() -> Vec<Question> {
        vec![
            Question::new("q1", "What is the building used for?", "", Vec::new()),
            Question::new("q2", "How tall is the building?", "", Vec::new()),
            Question::new(
                "custom",
                "Is there a fire blanket?",
                "Equipment",
                vec![RawOption::new("yes", "Yes"), RawOption::new("no", "No")],
            ),
        ]
    }

    #[test]
    fn next_is_disabled_until_something_is_selected() {
        let navigator = AssessmentNavigator::loaded(bank(), ProgressSnapshot::default());
        let card = map_question_card(&navigator, None).unwrap();
        assert!(!card.next_enabled);
        assert_eq!(card.header(), "Question 1 of 3");
        assert_eq!(card.next_label, NEXT_LABEL);
        assert!(card.options.iter().all(|option| !option.selected));

        let local = LocalSelection {
            question_index: 0,
            option_id: OptionId::new("office"),
        };
        let card = map_question_card(&navigator, Some(&local)).unwrap();
        assert!(card.next_enabled);
        let office = card.options.iter().find(|o| o.id.as_str() == "office").unwrap();
        assert!(office.selected);
        assert_eq!(office.class(), "option default selected");
    }

    #[test]
    fn stored_answer_preselects_option() {
        let progress = ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "multi")]);
        let mut navigator = AssessmentNavigator::loaded(bank(), progress);
        navigator.go_to_previous();
        assert_eq!(navigator.current_index(), 0);

        let card = map_question_card(&navigator, None).unwrap();
        assert!(card.next_enabled);
        let multi = card.options.iter().find(|o| o.selected).unwrap();
        assert_eq!(multi.id.as_str(), "multi");
        assert_eq!(multi.risk_badge().as_deref(), Some("medium Risk"));
        assert_eq!(multi.risk_class(), "risk-badge medium");
        assert_eq!(multi.tags, vec!["Housing Act 2004", "Fire Safety Order 2005"]);
    }

    #[test]
    fn stale_local_selection_is_ignored() {
        let navigator = AssessmentNavigator::loaded(bank(), ProgressSnapshot::default());
        let local = LocalSelection {
            question_index: 2,
            option_id: OptionId::new("yes"),
        };
        let card = map_question_card(&navigator, Some(&local)).unwrap();
        assert!(!card.next_enabled);
    }

    #[test]
    fn last_question_offers_completion_and_raw_options() {
        let progress = ProgressSnapshot::new(vec![
            ProgressAnswer::selected("q1", "office"),
            ProgressAnswer::selected("q2", "low_rise"),
        ]);
        let navigator = AssessmentNavigator::loaded(bank(), progress);
        let card = map_question_card(&navigator, None).unwrap();
        assert_eq!(card.question_number, 3);
        assert_eq!(card.next_label, COMPLETE_LABEL);
        assert_eq!(card.category_label, "Equipment");
        assert_eq!(card.options.len(), 2);
        assert_eq!(card.options[0].risk_badge(), None);
    }

    #[test]
    fn empty_bank_has_no_card_but_a_breadcrumb() {
        let navigator = AssessmentNavigator::loaded(Vec::new(), ProgressSnapshot::default());
        let page = map_assessment_page(&navigator, None);
        assert!(page.card.is_none());
        assert_eq!(
            page.breadcrumb,
            "Assessment • Building Type • Question 1 of 8"
        );
    }

    #[test]
    fn page_combines_stepper_and_panels() {
        let progress = ProgressSnapshot::new(vec![ProgressAnswer::selected("q1", "office")]);
        let navigator = AssessmentNavigator::loaded(bank(), progress);
        let page = map_assessment_page(&navigator, None);
        assert_eq!(
            page.breadcrumb,
            "Assessment • Building Type • Question 2 of 3"
        );
        assert_eq!(page.stepper.progress_label, "Progress: 1 of 5 steps completed");
        assert_eq!(page.stepper.time_label, "Estimated time remaining: 4 minutes");
        assert_eq!(page.summary.answered, 1);
        assert_eq!(page.progress.percent, 33);
    }
}
