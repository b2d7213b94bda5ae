//! Per-question presentation content.
//!
//! The standard bank (`q1`..`q8`) carries hand-authored copy layered over the
//! remote question object. Any other identifier renders its raw options.

use crate::model::RiskLevel::{High, Low, Medium};
use crate::model::{OptionId, Question, RiskLevel};

pub const DEFAULT_CATEGORY_LABEL: &str = "Building Information";
pub const CONTEXT_TITLE: &str = "UK Fire Safety Context";

/// Visual state of an option row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionState {
    #[default]
    Default,
    Warning,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedOption {
    pub id: OptionId,
    pub title: String,
    pub description: Option<String>,
    pub state: OptionState,
    pub risk_level: Option<RiskLevel>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPresentation {
    pub category_label: String,
    pub subtitle: String,
    pub context_title: String,
    pub context_body: String,
    pub note: Option<String>,
    pub options: Vec<PresentedOption>,
}

impl QuestionPresentation {
    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&PresentedOption> {
        self.options.iter().find(|option| &option.id == id)
    }
}

/// Build the presentation bundle for a question. Never fails.
#[must_use]
pub fn build_presentation(question: &Question) -> QuestionPresentation {
    let base_category = if question.category.is_empty() {
        DEFAULT_CATEGORY_LABEL.to_string()
    } else {
        question.category.clone()
    };

    let Some(bundle) = bundle_for(question.question_id.as_str()) else {
        return QuestionPresentation {
            category_label: base_category,
            subtitle: String::new(),
            context_title: CONTEXT_TITLE.to_string(),
            context_body: String::new(),
            note: None,
            options: question
                .options
                .iter()
                .map(|raw| PresentedOption {
                    id: raw.id.clone(),
                    title: raw.text.clone(),
                    description: None,
                    state: OptionState::Default,
                    risk_level: None,
                    tags: Vec::new(),
                })
                .collect(),
        };
    };

    QuestionPresentation {
        category_label: bundle
            .category
            .map_or(base_category, ToString::to_string),
        subtitle: bundle.subtitle.to_string(),
        context_title: CONTEXT_TITLE.to_string(),
        context_body: bundle.context_body.to_string(),
        note: bundle.note.map(ToString::to_string),
        options: bundle.options.iter().map(OptionSpec::present).collect(),
    }
}

struct OptionSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    risk: RiskLevel,
    tags: &'static [&'static str],
}

impl OptionSpec {
    fn present(&self) -> PresentedOption {
        PresentedOption {
            id: OptionId::new(self.id),
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            state: OptionState::Default,
            risk_level: Some(self.risk),
            tags: self.tags.iter().map(ToString::to_string).collect(),
        }
    }
}

struct BundleSpec {
    category: Option<&'static str>,
    subtitle: &'static str,
    context_body: &'static str,
    note: Option<&'static str>,
    options: &'static [OptionSpec],
}

fn bundle_for(question_id: &str) -> Option<&'static BundleSpec> {
    match question_id {
        "q1" => Some(&BUILDING_USE),
        "q2" => Some(&BUILDING_HEIGHT),
        "q3" => Some(&OCCUPANCY),
        "q4" => Some(&DETECTION),
        "q5" => Some(&MEANS_OF_ESCAPE),
        "q6" => Some(&MANAGEMENT),
        "q7" => Some(&VULNERABLE_PERSONS),
        "q8" => Some(&HAZARDS),
        _ => None,
    }
}

const fn opt(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    risk: RiskLevel,
    tags: &'static [&'static str],
) -> OptionSpec {
    OptionSpec {
        id,
        title,
        description,
        risk,
        tags,
    }
}

static BUILDING_USE: BundleSpec = BundleSpec {
    category: None,
    subtitle: "Select the primary use classification for this building.",
    context_body: "Under UK fire safety regulations, different building types have specific requirements. Residential buildings follow different standards than commercial or industrial premises.",
    note: Some(
        "Building classification affects the specific fire safety requirements and inspection frequency.",
    ),
    options: &[
        opt(
            "single",
            "Single family residential dwelling",
            "Houses, bungalows, and similar single-occupancy homes",
            Low,
            &["Building Regulation Part B"],
        ),
        opt(
            "multi",
            "Multi occupancy residential building",
            "Flats, apartments, HMOs with shared facilities",
            Medium,
            &["Housing Act 2004", "Fire Safety Order 2005"],
        ),
        opt(
            "office",
            "Commercial office building",
            "Offices, business premises, professional services",
            Medium,
            &["Fire Safety Order 2005"],
        ),
        opt(
            "retail",
            "Retail or hospitality premises",
            "Shops, restaurants, pubs, hotels",
            High,
            &["Fire Safety Order 2005", "Licensing Act 2003"],
        ),
        opt(
            "industrial",
            "Industrial or warehouse facility",
            "Manufacturing, storage, distribution centres",
            High,
            &["Fire Safety Order 2005 & DSEAR Regulations"],
        ),
    ],
};

static BUILDING_HEIGHT: BundleSpec = BundleSpec {
    category: None,
    subtitle: "Select the height category that best describes your building.",
    context_body: "Building height significantly impacts fire safety requirements under UK regulations. Buildings over 18 metres have additional requirements following the Building Safety Act 2022.",
    note: None,
    options: &[
        opt(
            "single_storey",
            "Single storey (ground floor only)",
            "No upper floors or basement levels",
            Low,
            &[],
        ),
        opt(
            "low_rise",
            "Low-rise (2–4 storeys)",
            "Up to 4 floors including ground floor",
            Low,
            &[],
        ),
        opt(
            "medium_rise",
            "Medium-rise (5–10 storeys)",
            "5 to 10 floors including ground floor",
            Medium,
            &[],
        ),
        opt(
            "high_rise",
            "High-rise (11+ storeys or over 18m)",
            "Buildings over 18 metres in height",
            High,
            &["Building Safety Act 2022"],
        ),
    ],
};

static OCCUPANCY: BundleSpec = BundleSpec {
    category: Some("Occupancy Assessment"),
    subtitle: "Estimate the maximum number of people who could be in the building at any time.",
    context_body: "Occupancy levels determine evacuation requirements, exit widths, and fire safety equipment needs under UK fire safety legislation.",
    note: None,
    options: &[
        opt(
            "very_small",
            "Very small (1–10 people)",
            "Small offices, single dwellings, small shops",
            Low,
            &[],
        ),
        opt(
            "small",
            "Small (11–50 people)",
            "Small businesses, restaurants, small offices",
            Low,
            &[],
        ),
        opt(
            "medium",
            "Medium (51–200 people)",
            "Larger offices, schools, medium retail premises",
            Medium,
            &[],
        ),
        opt(
            "large",
            "Large (201–500 people)",
            "Large offices, shopping centres, hotels",
            Medium,
            &[],
        ),
        opt(
            "very_large",
            "Very large (500+ people)",
            "Major venues, large shopping centres, stadiums",
            High,
            &[],
        ),
    ],
};

static DETECTION: BundleSpec = BundleSpec {
    category: Some("Fire Safety Systems"),
    subtitle: "Select all fire detection and alarm systems currently in place.",
    context_body: "UK fire safety regulations require appropriate detection systems based on building type and risk level. BS 5839 provides the classification of fire alarm systems.",
    note: None,
    options: &[
        opt(
            "smoke",
            "Smoke detectors/alarms",
            "Typically optical or ionisation devices",
            Low,
            &[],
        ),
        opt(
            "heat",
            "Heat detectors",
            "Rate-of-rise or fixed-temperature heat detectors",
            Low,
            &[],
        ),
        opt(
            "manual",
            "Manual fire alarm call points",
            "Break-glass units for manual activation",
            Medium,
            &[],
        ),
        opt(
            "afss",
            "Automatic fire alarm system",
            "Grade and category vary by building use",
            Medium,
            &[],
        ),
        opt(
            "sprinkler",
            "Automatic sprinkler system",
            "Wet/dry pipe, residential or commercial systems",
            Medium,
            &[],
        ),
        opt("none", "No fire detection system", "High risk", High, &[]),
    ],
};

static MEANS_OF_ESCAPE: BundleSpec = BundleSpec {
    category: Some("Means of Escape"),
    subtitle: "Assess the adequacy of escape routes, exit signage, and emergency lighting.",
    context_body: "Adequate means of escape are fundamental to UK fire safety. All escape routes must be clearly marked, unobstructed, and lead to a place of ultimate safety.",
    note: Some("Escape routes must comply with Building Regulations Approved Document B."),
    options: &[
        opt(
            "excellent",
            "Excellent - Multiple clear routes, good signage",
            "Multiple escape routes, clear signage, emergency lighting, unobstructed paths",
            Low,
            &[],
        ),
        opt(
            "good",
            "Good - Adequate routes with minor issues",
            "Sufficient escape routes with some minor signage or lighting issues",
            Low,
            &[],
        ),
        opt(
            "fair",
            "Fair - Some routes but improvements needed",
            "Basic escape provision but requires improvements to signage or lighting",
            Medium,
            &[],
        ),
        opt(
            "poor",
            "Poor - Limited routes, unclear signage",
            "Insufficient escape routes, poor signage, or obstructed paths",
            High,
            &[],
        ),
        opt(
            "very_poor",
            "Very poor - Inadequate or blocked routes",
            "Seriously inadequate escape provision, blocked routes, no signage",
            High,
            &[],
        ),
    ],
};

static MANAGEMENT: BundleSpec = BundleSpec {
    category: Some("Fire Safety Management"),
    subtitle: "Select all fire safety management activities currently implemented.",
    context_body: "UK Fire Safety Order requires adequate management systems including risk assessments, training, and records. Effective management underpins daily compliance.",
    note: None,
    options: &[
        opt(
            "written_risk_assessment",
            "Written fire risk assessment",
            "Documented assessment updated regularly",
            Low,
            &[],
        ),
        opt(
            "drills",
            "Routine fire drills / evacuations",
            "Scheduled drills with recorded outcomes",
            Low,
            &[],
        ),
        opt(
            "training",
            "Regular staff fire safety training",
            "Inductions and refreshers for all staff",
            Medium,
            &[],
        ),
        opt(
            "logbook",
            "Fire logbook / records and checks",
            "Maintenance, testing, and weekly checks recorded",
            Medium,
            &[],
        ),
        opt(
            "responsible_person",
            "Responsible Person (RP) appointed",
            "Named competent person managing duties",
            Medium,
            &[],
        ),
        opt("none", "No formal fire safety management", "High risk", High, &[]),
    ],
};

static VULNERABLE_PERSONS: BundleSpec = BundleSpec {
    category: Some("Vulnerable Persons"),
    subtitle: "Consider people with mobility issues, hearing/visual impairments, or other needs.",
    context_body: "UK equality legislation and fire safety guidance require special consideration for people who may need assistance during emergency evacuation.",
    note: Some(
        "Personal Emergency Evacuation Plans (PEEPs) should be prepared for vulnerable persons.",
    ),
    options: &[
        opt(
            "none_identified",
            "No vulnerable persons identified",
            "All occupants can evacuate independently",
            Low,
            &[],
        ),
        opt(
            "few_with_peeps",
            "Few vulnerable persons with evacuation plans",
            "Small number with documented Personal Emergency Evacuation Plans (PEEPs)",
            Low,
            &[],
        ),
        opt(
            "some_with_peeps",
            "Some vulnerable persons with evacuation plans",
            "Moderate number with appropriate evacuation assistance plans",
            Medium,
            &[],
        ),
        opt(
            "many_with_peeps",
            "Many vulnerable persons with evacuation plans",
            "Significant number requiring assistance with documented plans",
            Medium,
            &[],
        ),
        opt(
            "without_plans",
            "Vulnerable persons without adequate plans",
            "People requiring assistance but no formal evacuation plans",
            High,
            &[],
        ),
    ],
};

static HAZARDS: BundleSpec = BundleSpec {
    category: Some("Fire Hazards"),
    subtitle: "Identify significant fire hazards that could increase fire risk.",
    context_body: "Common hazards include ignition sources, combustible materials, and unsafe practices. Select those present in the building to inform mitigation actions.",
    note: None,
    options: &[
        opt(
            "electrical",
            "Electrical equipment and wiring",
            "Overloaded circuits, damaged cables",
            Medium,
            &[],
        ),
        opt(
            "heating",
            "Heating equipment",
            "Gas heaters, portable heaters",
            High,
            &[],
        ),
        opt(
            "cooking",
            "Cooking facilities and appliances",
            "Kitchens, cooking oils and grease",
            High,
            &[],
        ),
        opt(
            "flammables",
            "Flammable storage and liquids",
            "Paints, solvents, alcohols, chemicals",
            High,
            &[],
        ),
        opt(
            "smoking",
            "Smoking materials and designated areas",
            "Discarded cigarettes, ash bins",
            Medium,
            &[],
        ),
        opt(
            "hot_work",
            "Hot work activities (welding, cutting)",
            "Sparks, heat sources during works",
            High,
            &[],
        ),
        opt(
            "storage",
            "Large storage areas with combustible materials",
            "Warehouse racking, paper/cardboard",
            Medium,
            &[],
        ),
        opt(
            "waste",
            "Waste/rubbish storage and disposal",
            "Bins near buildings, accumulation of waste",
            Medium,
            &[],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawOption;

    fn question(id: &str, category: &str, options: Vec<RawOption>) -> Question {
        Question::new(id, "Question text", category, options)
    }

    #[test]
    fn building_height_has_four_tiers() {
        let presentation = build_presentation(&question("q2", "Building Information", vec![]));
        let ids = presentation
            .options
            .iter()
            .map(|option| option.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["single_storey", "low_rise", "medium_rise", "high_rise"]);

        let high_rise = &presentation.options[3];
        assert_eq!(high_rise.tags, vec!["Building Safety Act 2022".to_string()]);
        assert_eq!(high_rise.risk_level, Some(RiskLevel::High));
        assert!(presentation.options[..3].iter().all(|option| option.tags.is_empty()));
    }

    #[test]
    fn unknown_question_falls_back_to_raw_options() {
        let presentation =
            build_presentation(&question("q42", "", vec![RawOption::new("x", "X")]));
        assert_eq!(presentation.options.len(), 1);
        let option = &presentation.options[0];
        assert_eq!(option.id.as_str(), "x");
        assert_eq!(option.title, "X");
        assert_eq!(option.risk_level, None);
        assert_eq!(option.description, None);
        assert!(option.tags.is_empty());
        assert_eq!(presentation.category_label, DEFAULT_CATEGORY_LABEL);
        assert!(presentation.subtitle.is_empty());
        assert!(presentation.note.is_none());
    }

    #[test]
    fn authored_bundles_ignore_raw_options() {
        let presentation = build_presentation(&question(
            "q1",
            "Building Information",
            vec![RawOption::new("x", "X")],
        ));
        assert_eq!(presentation.options.len(), 5);
        assert_eq!(presentation.options[0].id.as_str(), "single");
        assert!(presentation.note.is_some());
    }

    #[test]
    fn category_overrides_apply_from_q3() {
        let q1 = build_presentation(&question("q1", "Premises", vec![]));
        assert_eq!(q1.category_label, "Premises");

        let q3 = build_presentation(&question("q3", "Premises", vec![]));
        assert_eq!(q3.category_label, "Occupancy Assessment");

        let q8 = build_presentation(&question("q8", "Premises", vec![]));
        assert_eq!(q8.category_label, "Fire Hazards");
        assert_eq!(q8.options.len(), 8);
        assert!(q8.note.is_none());
    }

    #[test]
    fn every_authored_bundle_has_context() {
        for n in 1..=8 {
            let presentation = build_presentation(&question(&format!("q{n}"), "", vec![]));
            assert_eq!(presentation.context_title, CONTEXT_TITLE);
            assert!(!presentation.context_body.is_empty(), "q{n} context");
            assert!(!presentation.subtitle.is_empty(), "q{n} subtitle");
            assert!(
                presentation.options.iter().all(|option| option.risk_level.is_some()),
                "q{n} tiers"
            );
        }
    }
}
