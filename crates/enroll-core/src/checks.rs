//! Pure per-field checks.
//!
//! Each check takes a current value (already trimmed by the caller) and its
//! rule, and returns the first failing condition in the field's priority
//! order. No check touches the form surface; presenting an [`Outcome`] is the
//! engine's job.

use crate::messages::ErrorKind;
use crate::rules::{BoundedRule, EmailRule, GroupRule, PhoneRule, TextRule, UploadRule};

/// Result of checking one control against its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid(ErrorKind),
}

impl Outcome {
    /// Returns whether the check passed.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Required text field: empty and required fails, anything else passes.
pub fn required_text(value: &str, rule: &TextRule) -> Outcome {
    if rule.is_required && value.is_empty() {
        return Outcome::Invalid(ErrorKind::Empty);
    }

    Outcome::Valid
}

/// Phone field: a present value must have exactly the masked length.
pub fn phone(value: &str, rule: &PhoneRule) -> Outcome {
    if rule.is_required && value.is_empty() {
        return Outcome::Invalid(ErrorKind::Empty);
    }

    if !value.is_empty() && value.chars().count() != rule.mask_length {
        return Outcome::Invalid(ErrorKind::Invalid);
    }

    Outcome::Valid
}

/// Email field: a present value must match the permissive pattern.
pub fn email(value: &str, rule: &EmailRule) -> Outcome {
    if rule.is_required && value.is_empty() {
        return Outcome::Invalid(ErrorKind::Empty);
    }

    if !value.is_empty() && !rule.pattern.is_match(&value.to_lowercase()) {
        return Outcome::Invalid(ErrorKind::Invalid);
    }

    Outcome::Valid
}

/// Length-bounded field (password, tax id, message): max is checked before
/// min, and a non-required empty value passes both.
pub fn length_bounded(value: &str, rule: &BoundedRule) -> Outcome {
    if rule.is_required && value.is_empty() {
        return Outcome::Invalid(ErrorKind::Empty);
    }

    let length = value.chars().count();

    if length > 0 && length > rule.max_length {
        return Outcome::Invalid(ErrorKind::TooLong(rule.max_length));
    }

    if length > 0 && length < rule.min_length {
        return Outcome::Invalid(ErrorKind::TooShort(rule.min_length));
    }

    Outcome::Valid
}

/// One select of a select group: index 0 is the placeholder option.
pub fn selection(selected_index: usize, rule: &GroupRule) -> Outcome {
    if selected_index == 0 && rule.is_required {
        return Outcome::Invalid(ErrorKind::Unselected);
    }

    Outcome::Valid
}

/// One checkbox of an agreement group.
pub fn agreement(checked: bool, rule: &GroupRule) -> Outcome {
    if !checked && rule.is_required {
        return Outcome::Invalid(ErrorKind::Unchecked);
    }

    Outcome::Valid
}

/// File upload: the first file name failing the extension pattern fails the
/// field. An empty selection passes.
pub fn upload(file_names: &[String], rule: &UploadRule) -> Outcome {
    for name in file_names {
        if !rule.allowed.is_match(name) {
            return Outcome::Invalid(ErrorKind::Invalid);
        }
    }

    Outcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn test_required_text() {
        let rules = RuleSet::default();
        assert_eq!(required_text("", &rules.first_name), Outcome::Invalid(ErrorKind::Empty));
        assert_eq!(required_text("Ada", &rules.first_name), Outcome::Valid);

        let mut optional = rules.first_name.clone();
        optional.is_required = false;
        assert_eq!(required_text("", &optional), Outcome::Valid);
    }

    #[test]
    fn test_phone_length() {
        let rules = RuleSet::default();
        assert_eq!(phone("", &rules.phone), Outcome::Invalid(ErrorKind::Empty));
        assert_eq!(phone("+375(29", &rules.phone), Outcome::Invalid(ErrorKind::Invalid));
        assert_eq!(phone("+375(29)123-45-67", &rules.phone), Outcome::Valid);
    }

    #[test]
    fn test_optional_phone_still_checks_present_value() {
        let mut rule = RuleSet::default().phone;
        rule.is_required = false;
        assert_eq!(phone("", &rule), Outcome::Valid);
        assert_eq!(phone("12345", &rule), Outcome::Invalid(ErrorKind::Invalid));
    }

    #[test]
    fn test_email_pattern() {
        let rules = RuleSet::default();
        assert_eq!(email("", &rules.email), Outcome::Invalid(ErrorKind::Empty));
        assert_eq!(email("user@example.com", &rules.email), Outcome::Valid);
        assert_eq!(email("User.Name@Domain.co.uk", &rules.email), Outcome::Valid);
        assert_eq!(email("no-at-sign", &rules.email), Outcome::Invalid(ErrorKind::Invalid));
        assert_eq!(email("@example.com", &rules.email), Outcome::Invalid(ErrorKind::Invalid));
    }

    #[test]
    fn test_password_bounds_are_exclusive_and_exhaustive() {
        let rules = RuleSet::default();
        let rule = &rules.password;

        assert_eq!(length_bounded("", rule), Outcome::Invalid(ErrorKind::Empty));
        assert_eq!(
            length_bounded(&"x".repeat(21), rule),
            Outcome::Invalid(ErrorKind::TooLong(20)),
        );
        assert_eq!(
            length_bounded("short", rule),
            Outcome::Invalid(ErrorKind::TooShort(8)),
        );
        assert_eq!(length_bounded("adequate-1", rule), Outcome::Valid);
        assert_eq!(length_bounded(&"x".repeat(20), rule), Outcome::Valid);
        assert_eq!(length_bounded(&"x".repeat(8), rule), Outcome::Valid);
    }

    #[test]
    fn test_group_members() {
        let rules = RuleSet::default();
        assert_eq!(selection(0, &rules.selects), Outcome::Invalid(ErrorKind::Unselected));
        assert_eq!(selection(2, &rules.selects), Outcome::Valid);
        assert_eq!(agreement(false, &rules.agreements), Outcome::Invalid(ErrorKind::Unchecked));
        assert_eq!(agreement(true, &rules.agreements), Outcome::Valid);
    }

    #[test]
    fn test_upload_extensions() {
        let rules = RuleSet::default();
        let ok = vec!["resume.pdf".to_string(), "photo.JPG".to_string()];
        assert_eq!(upload(&ok, &rules.upload), Outcome::Valid);

        let bad = vec!["resume.pdf".to_string(), "virus.exe".to_string()];
        assert_eq!(upload(&bad, &rules.upload), Outcome::Invalid(ErrorKind::Invalid));

        assert_eq!(upload(&[], &rules.upload), Outcome::Valid);
    }
}
