use serde::{Deserialize, Serialize};

/// Testimonial shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub initials: Option<String>,
}

impl Testimonial {
    /// Explicit initials, or the first letters of up to two name words.
    #[must_use]
    pub fn display_initials(&self) -> String {
        if let Some(initials) = self.initials.as_deref().filter(|value| !value.is_empty()) {
            return initials.to_string();
        }
        self.name
            .split(' ')
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Headline figures for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteStats {
    pub rating: f64,
    pub approval: f64,
    pub compliance: f64,
}

impl SiteStats {
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{}/5", self.rating)
    }

    #[must_use]
    pub fn approval_label(&self) -> String {
        format!("{}%", self.approval)
    }

    #[must_use]
    pub fn compliance_label(&self) -> String {
        format!("{}%", self.compliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(name: &str, initials: Option<&str>) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            role: "Landlord".to_string(),
            company: "Acme Lettings".to_string(),
            rating: 5.0,
            text: "Clear and quick.".to_string(),
            category: "Residential".to_string(),
            initials: initials.map(str::to_string),
        }
    }

    #[test]
    fn initials_fall_back_to_name_words() {
        assert_eq!(testimonial("sarah jane mitchell", None).display_initials(), "SJ");
        assert_eq!(testimonial("Cher", None).display_initials(), "C");
        assert_eq!(testimonial("Sarah Mitchell", Some("SM")).display_initials(), "SM");
    }

    #[test]
    fn stats_labels_drop_trailing_zero() {
        let stats = SiteStats {
            rating: 4.9,
            approval: 98.0,
            compliance: 100.0,
        };
        assert_eq!(stats.rating_label(), "4.9/5");
        assert_eq!(stats.approval_label(), "98%");
        assert_eq!(stats.compliance_label(), "100%");
    }
}
