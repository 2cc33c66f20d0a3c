use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Shape check for contact emails: `local@domain.tld` with no whitespace.
    /// Deliberately loose - this gates obvious typos, not RFC 5322.
    /// - Valid: "student@campus.edu", "a@b.co"
    /// - Invalid: "not-an-email", "a@b", "a b@c.d"
    static ref EMAIL_REGEX: Regex = Regex::new(r"^\S+@\S+\.\S+$").unwrap();
}

/// Raw form payload for a report submission, exactly as entered. Nothing is
/// trimmed or stamped until it passes validation and becomes a [`Report`].
///
/// [`Report`]: crate::report::Report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    pub item_name: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub details: String,
    pub contact_name: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Required field is empty after trimming. Carries the wire name.
    Missing(&'static str),
    /// Contact email does not match the `local@domain.tld` shape.
    InvalidEmail,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Missing(name) => write!(f, "{} is required", name),
            FieldError::InvalidEmail => write!(f, "contactEmail is not a valid address"),
        }
    }
}

/// Every problem found in a draft, so a form can surface all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn contains_missing(&self, name: &str) -> bool {
        self.0
            .iter()
            .any(|e| matches!(e, FieldError::Missing(n) if *n == name))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ReportDraft {
    /// Check the draft against the required-field set and the email shape.
    /// Returns every failing field, not just the first.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let required = [
            ("itemName", &self.item_name),
            ("category", &self.category),
            ("location", &self.location),
            ("date", &self.date),
            ("details", &self.details),
            ("contactName", &self.contact_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::Missing(name));
            }
        }

        let email = self.contact_email.trim();
        if email.is_empty() {
            errors.push(FieldError::Missing("contactEmail"));
        } else if !EMAIL_REGEX.is_match(email) {
            errors.push(FieldError::InvalidEmail);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ReportDraft {
        ReportDraft {
            item_name: "Purse".to_string(),
            category: "Accessories".to_string(),
            location: "Library".to_string(),
            date: "2026-01-12".to_string(),
            details: "Black purse with small gold chain.".to_string(),
            contact_name: "Student".to_string(),
            contact_email: "student@campus.edu".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_passes() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let cases: [(&str, fn(&mut ReportDraft)); 7] = [
            ("itemName", |d| d.item_name.clear()),
            ("category", |d| d.category.clear()),
            ("location", |d| d.location.clear()),
            ("date", |d| d.date.clear()),
            ("details", |d| d.details.clear()),
            ("contactName", |d| d.contact_name.clear()),
            ("contactEmail", |d| d.contact_email.clear()),
        ];

        for (name, blank) in cases {
            let mut draft = complete_draft();
            blank(&mut draft);
            let errors = draft.validate().unwrap_err();
            assert!(errors.contains_missing(name), "expected {} reported", name);
            assert_eq!(errors.0.len(), 1);
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut draft = complete_draft();
        draft.location = "   ".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains_missing("location"));
    }

    #[test]
    fn test_email_shape_valid() {
        for email in ["student@campus.edu", "a@b.co", "first.last@sub.domain.org"] {
            let mut draft = complete_draft();
            draft.contact_email = email.to_string();
            assert!(draft.validate().is_ok(), "expected {} accepted", email);
        }
    }

    #[test]
    fn test_email_shape_invalid() {
        for email in ["not-an-email", "a@b", "missing-at.com", "a b@c.d"] {
            let mut draft = complete_draft();
            draft.contact_email = email.to_string();
            let errors = draft.validate().unwrap_err();
            assert_eq!(errors.0, vec![FieldError::InvalidEmail], "for {}", email);
        }
    }

    #[test]
    fn test_email_is_trimmed_before_check() {
        let mut draft = complete_draft();
        draft.contact_email = "  student@campus.edu  ".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_all_failures_reported_together() {
        let draft = ReportDraft {
            contact_email: "bogus".to_string(),
            ..Default::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.0.len(), 7);
        assert!(errors.0.contains(&FieldError::InvalidEmail));
    }

    #[test]
    fn test_display_lists_fields() {
        let draft = ReportDraft::default();
        let message = draft.validate().unwrap_err().to_string();
        assert!(message.contains("itemName"));
        assert!(message.contains("contactEmail"));
    }
}
