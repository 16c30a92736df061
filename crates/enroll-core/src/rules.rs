//! Field rules: the built-in table and typed override merging.
//!
//! One rule struct per field shape, one named slot per validated field. The
//! merged table is immutable for the life of the bound form: overrides are
//! applied leaf by leaf at construction, never afterwards.

use regex::Regex;
use serde::Deserialize;

use crate::mask::MaskSpec;
use crate::messages::MessageSet;

/// Phone mask of the rendered form (Belarus mobile numbers).
pub const PHONE_MASK: &str = "+{375}(00)000-00-00";

/// Formatted length of a completely masked phone number.
pub const PHONE_MASK_LENGTH: usize = 17;

/// Permissive email pattern: common valid addresses, not full RFC 5322.
/// Input is lowercased before matching.
const EMAIL_PATTERN: &str = r"[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

/// File extensions accepted by the upload field.
const UPLOAD_EXTENSIONS: &str = r"(?i)(\.doc|\.docx|\.odt|\.pdf|\.tex|\.txt|\.rtf|\.wps|\.wks|\.wpd|\.ppt|\.pptx|\.png|\.jpg|\.jpeg)$";

const ALREADY_REGISTERED: &str = "Your company is already registered, please contact your \
     account manager or <a href=\"#\" target=\"_blank\">message us</a>";

/// Rule for a plain required text field.
#[derive(Debug, Clone)]
pub struct TextRule {
    pub is_required: bool,
    pub messages: MessageSet,
}

/// Rule for the masked phone field.
#[derive(Debug, Clone)]
pub struct PhoneRule {
    pub is_required: bool,
    /// Length of a completely masked value; anything else is invalid.
    pub mask_length: usize,
    pub mask: MaskSpec,
    pub messages: MessageSet,
}

/// Rule for the email field.
#[derive(Debug, Clone)]
pub struct EmailRule {
    pub is_required: bool,
    pub pattern: Regex,
    pub messages: MessageSet,
}

/// Rule for a length-bounded field (password, tax id, message).
#[derive(Debug, Clone)]
pub struct BoundedRule {
    pub is_required: bool,
    pub min_length: usize,
    pub max_length: usize,
    /// Input mask, where the field carries one (tax id).
    pub mask: Option<MaskSpec>,
    pub messages: MessageSet,
}

/// Rule for a checkbox or select group; every member is checked against it.
#[derive(Debug, Clone)]
pub struct GroupRule {
    pub is_required: bool,
    pub messages: MessageSet,
}

/// Rule for the file-upload field.
#[derive(Debug, Clone)]
pub struct UploadRule {
    pub is_required: bool,
    pub allowed: Regex,
    pub messages: MessageSet,
}

/// The merged rule table: one entry per field the engine knows how to bind.
///
/// A rule exists for every bindable field; whether the form actually renders
/// the field is the engine's concern.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub first_name: TextRule,
    pub second_name: TextRule,
    pub phone: PhoneRule,
    pub email: EmailRule,
    pub password: BoundedRule,
    pub tax_id: BoundedRule,
    pub message: BoundedRule,
    pub agreements: GroupRule,
    pub selects: GroupRule,
    pub upload: UploadRule,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            first_name: TextRule {
                is_required: true,
                messages: MessageSet::new().empty("Enter your name"),
            },
            second_name: TextRule {
                is_required: true,
                messages: MessageSet::new().empty("Enter your last name"),
            },
            phone: PhoneRule {
                is_required: true,
                mask_length: PHONE_MASK_LENGTH,
                mask: MaskSpec::Pattern(PHONE_MASK.to_string()),
                messages: MessageSet::new()
                    .empty("Enter a phone number")
                    .invalid("Invalid phone number"),
            },
            email: EmailRule {
                is_required: true,
                pattern: Regex::new(EMAIL_PATTERN).unwrap(),
                messages: MessageSet::new()
                    .empty("Enter an email address")
                    .invalid("Invalid email address"),
            },
            password: BoundedRule {
                is_required: true,
                min_length: 8,
                max_length: 20,
                mask: None,
                messages: MessageSet::new().empty("Enter a password"),
            },
            tax_id: BoundedRule {
                is_required: true,
                min_length: 9,
                max_length: 12,
                mask: Some(MaskSpec::Digits),
                messages: MessageSet::new()
                    .empty("Enter your tax number")
                    .already_exists(ALREADY_REGISTERED),
            },
            message: BoundedRule {
                is_required: true,
                min_length: 8,
                max_length: 250,
                mask: None,
                messages: MessageSet::new().empty("Enter a message"),
            },
            agreements: GroupRule {
                is_required: true,
                messages: MessageSet::new().unchecked("Confirm the agreement"),
            },
            selects: GroupRule {
                is_required: true,
                messages: MessageSet::new().unselected("Select a value"),
            },
            upload: UploadRule {
                is_required: false,
                allowed: Regex::new(UPLOAD_EXTENSIONS).unwrap(),
                messages: MessageSet::new().invalid("Invalid file type"),
            },
        }
    }
}

/// Override for a [`TextRule`]. Unset leaves keep the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextOverride {
    pub is_required: Option<bool>,
    pub messages: MessageSet,
}

/// Override for the [`PhoneRule`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhoneOverride {
    pub is_required: Option<bool>,
    pub mask_length: Option<usize>,
    pub mask: Option<MaskSpec>,
    pub messages: MessageSet,
}

/// Override for the [`EmailRule`]. The pattern itself is not overridable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmailOverride {
    pub is_required: Option<bool>,
    pub messages: MessageSet,
}

/// Override for a [`BoundedRule`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoundedOverride {
    pub is_required: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub messages: MessageSet,
}

/// Override for a [`GroupRule`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupOverride {
    pub is_required: Option<bool>,
    pub messages: MessageSet,
}

/// Override for the [`UploadRule`]. The extension pattern is not overridable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadOverride {
    pub is_required: Option<bool>,
    pub messages: MessageSet,
}

/// Caller-supplied overrides, one optional entry per field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleOverrides {
    pub first_name: TextOverride,
    pub second_name: TextOverride,
    pub phone: PhoneOverride,
    pub email: EmailOverride,
    pub password: BoundedOverride,
    pub tax_id: BoundedOverride,
    pub message: BoundedOverride,
    pub agreements: GroupOverride,
    pub selects: GroupOverride,
    pub upload: UploadOverride,
}

fn text(rule: &TextRule, over: &TextOverride) -> TextRule {
    TextRule {
        is_required: over.is_required.unwrap_or(rule.is_required),
        messages: rule.messages.merged(&over.messages),
    }
}

fn bounded(rule: &BoundedRule, over: &BoundedOverride) -> BoundedRule {
    BoundedRule {
        is_required: over.is_required.unwrap_or(rule.is_required),
        min_length: over.min_length.unwrap_or(rule.min_length),
        max_length: over.max_length.unwrap_or(rule.max_length),
        mask: rule.mask.clone(),
        messages: rule.messages.merged(&over.messages),
    }
}

fn group(rule: &GroupRule, over: &GroupOverride) -> GroupRule {
    GroupRule {
        is_required: over.is_required.unwrap_or(rule.is_required),
        messages: rule.messages.merged(&over.messages),
    }
}

impl RuleSet {
    /// Applies overrides leaf by leaf and returns the merged table.
    #[must_use]
    pub fn merged(&self, over: &RuleOverrides) -> Self {
        Self {
            first_name: text(&self.first_name, &over.first_name),
            second_name: text(&self.second_name, &over.second_name),
            phone: PhoneRule {
                is_required: over.phone.is_required.unwrap_or(self.phone.is_required),
                mask_length: over.phone.mask_length.unwrap_or(self.phone.mask_length),
                mask: over.phone.mask.clone().unwrap_or_else(|| self.phone.mask.clone()),
                messages: self.phone.messages.merged(&over.phone.messages),
            },
            email: EmailRule {
                is_required: over.email.is_required.unwrap_or(self.email.is_required),
                pattern: self.email.pattern.clone(),
                messages: self.email.messages.merged(&over.email.messages),
            },
            password: bounded(&self.password, &over.password),
            tax_id: bounded(&self.tax_id, &over.tax_id),
            message: bounded(&self.message, &over.message),
            agreements: group(&self.agreements, &over.agreements),
            selects: group(&self.selects, &over.selects),
            upload: UploadRule {
                is_required: over.upload.is_required.unwrap_or(self.upload.is_required),
                allowed: self.upload.allowed.clone(),
                messages: self.upload.messages.merged(&over.upload.messages),
            },
        }
    }
}
