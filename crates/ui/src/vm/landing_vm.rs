use nfrpr_core::model::{SiteStats, Testimonial};
use services::LandingContent;

pub const FALLBACK_RATING: &str = "4.9/5";
pub const FALLBACK_APPROVAL: &str = "98%";
pub const FALLBACK_COMPLIANCE: &str = "100%";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqItem; 6] = [
    FaqItem {
        question: "How long does the fire safety assessment take to complete?",
        answer: "The assessment typically takes 10-15 minutes to complete. Our questionnaire is designed to be comprehensive yet efficient, covering all essential fire safety aspects without overwhelming detail. You can save your progress and return later if needed.",
    },
    FaqItem {
        question: "Is this assessment legally compliant with UK fire safety regulations?",
        answer: "Yes, our assessment is fully compliant with the Regulatory Reform (Fire Safety) Order 2005 and Building Regulations Approved Document B. The reports generated meet all requirements for insurance, local authority inspections, and regulatory compliance documentation.",
    },
    FaqItem {
        question: "What types of properties can use this assessment tool?",
        answer: "Our assessment covers residential properties (flats, houses, HMOs), commercial buildings (offices, shops, warehouses), educational facilities (schools, colleges), hospitality venues (hotels, restaurants), and healthcare facilities. The questionnaire adapts based on your property type.",
    },
    FaqItem {
        question: "Do I need any technical fire safety knowledge to complete this?",
        answer: "No technical expertise is required. Our questionnaire uses simple, clear language and multiple-choice questions. Each question includes helpful explanations and guidance to ensure you can answer confidently, regardless of your fire safety background.",
    },
    FaqItem {
        question: "What happens if my assessment identifies fire safety issues?",
        answer: "If issues are identified, your report will include detailed recommendations for addressing them, prioritized by risk level. We provide practical guidance on next steps, including when to consult fire safety professionals and how to implement improvements cost-effectively.",
    },
    FaqItem {
        question: "Can I use this assessment for insurance or regulatory purposes?",
        answer: "Absolutely. Our PDF reports are professionally formatted and include all necessary documentation for insurance claims, local authority inspections, and regulatory compliance verification. Many insurance companies accept our assessments as valid fire risk documentation.",
    },
];

/// At most one FAQ entry is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Open `index`, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialVm {
    pub initials: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub text: String,
    pub category: String,
}

impl From<&Testimonial> for TestimonialVm {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            initials: testimonial.display_initials(),
            name: testimonial.name.clone(),
            role: testimonial.role.clone(),
            company: testimonial.company.clone(),
            text: testimonial.text.clone(),
            category: testimonial.category.clone(),
        }
    }
}

fn fallback(
    initials: &str,
    name: &str,
    role: &str,
    company: &str,
    category: &str,
    text: &str,
) -> TestimonialVm {
    TestimonialVm {
        initials: initials.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        text: text.to_string(),
        category: category.to_string(),
    }
}

/// Cards shown when no testimonials could be fetched.
#[must_use]
pub fn fallback_testimonials() -> Vec<TestimonialVm> {
    vec![
        fallback(
            "SM",
            "Sarah Mitchell",
            "Property Manager",
            "London Residential Ltd",
            "Residential Complex",
            "The assessment was incredibly straightforward and saved us hours of paperwork. The PDF report was exactly what our insurance company needed for compliance verification.",
        ),
        fallback(
            "JT",
            "James Thompson",
            "Facilities Director",
            "Manchester Business Centre",
            "Commercial Office",
            "As someone without a fire safety background, I was worried about getting this wrong. The questionnaire was clear, and the results gave me complete confidence in our compliance status.",
        ),
        fallback(
            "ER",
            "Emma Roberts",
            "School Administrator",
            "Westfield Primary School",
            "Educational Facility",
            "The detailed recommendations helped us identify areas for improvement we hadn't considered. The report format was perfect for our local authority inspection.",
        ),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub rating: String,
    pub approval: String,
    pub compliance: String,
}

impl From<Option<&SiteStats>> for StatsVm {
    fn from(stats: Option<&SiteStats>) -> Self {
        match stats {
            Some(stats) => Self {
                rating: stats.rating_label(),
                approval: stats.approval_label(),
                compliance: stats.compliance_label(),
            },
            None => Self {
                rating: FALLBACK_RATING.to_string(),
                approval: FALLBACK_APPROVAL.to_string(),
                compliance: FALLBACK_COMPLIANCE.to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingVm {
    pub testimonials: Vec<TestimonialVm>,
    pub stats: StatsVm,
}

#[must_use]
pub fn map_landing(content: &LandingContent) -> LandingVm {
    let testimonials = if content.testimonials.is_empty() {
        fallback_testimonials()
    } else {
        content.testimonials.iter().map(TestimonialVm::from).collect()
    };
    LandingVm {
        testimonials,
        stats: StatsVm::from(content.stats.as_ref()),
    }
}

impl Default for LandingVm {
    fn default() -> Self {
        map_landing(&LandingContent::default())
    }
}
