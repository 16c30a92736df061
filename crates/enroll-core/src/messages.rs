//! Error kinds and message rendering.

use serde::{Deserialize, Serialize};

/// A validation failure, carrying the violated limit where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required field left empty.
    Empty,
    /// Value present but malformed (phone length, email pattern, file type).
    Invalid,
    /// Value longer than the field's maximum length.
    TooLong(usize),
    /// Value shorter than the field's minimum length.
    TooShort(usize),
    /// Required checkbox left unchecked.
    Unchecked,
    /// Required select left on its placeholder option.
    Unselected,
    /// Tax id already present in the remote collection.
    AlreadyExists,
}

/// Static messages for one field.
///
/// Every leaf is optional so the same shape doubles as its own override:
/// merging keeps the default for any leaf the override leaves unset. Length
/// messages are not stored here — [`render`] interpolates the limit itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageSet {
    pub empty: Option<String>,
    pub invalid: Option<String>,
    pub unchecked: Option<String>,
    pub unselected: Option<String>,
    pub already_exists: Option<String>,
}

impl MessageSet {
    /// Creates an empty message set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the empty-field message.
    #[must_use]
    pub fn empty(mut self, message: impl Into<String>) -> Self {
        self.empty = Some(message.into());
        self
    }

    /// Sets the malformed-value message.
    #[must_use]
    pub fn invalid(mut self, message: impl Into<String>) -> Self {
        self.invalid = Some(message.into());
        self
    }

    /// Sets the unchecked-checkbox message.
    #[must_use]
    pub fn unchecked(mut self, message: impl Into<String>) -> Self {
        self.unchecked = Some(message.into());
        self
    }

    /// Sets the unselected-option message.
    #[must_use]
    pub fn unselected(mut self, message: impl Into<String>) -> Self {
        self.unselected = Some(message.into());
        self
    }

    /// Sets the duplicate-record message. May contain markup; it is rendered
    /// into the error container as-is.
    #[must_use]
    pub fn already_exists(mut self, message: impl Into<String>) -> Self {
        self.already_exists = Some(message.into());
        self
    }

    /// Merges an override onto this set. A set leaf in the override replaces
    /// the corresponding leaf here; unset leaves are kept.
    #[must_use]
    pub fn merged(&self, over: &Self) -> Self {
        Self {
            empty: over.empty.clone().or_else(|| self.empty.clone()),
            invalid: over.invalid.clone().or_else(|| self.invalid.clone()),
            unchecked: over.unchecked.clone().or_else(|| self.unchecked.clone()),
            unselected: over.unselected.clone().or_else(|| self.unselected.clone()),
            already_exists: over
                .already_exists
                .clone()
                .or_else(|| self.already_exists.clone()),
        }
    }
}

const FALLBACK: &str = "Invalid value.";

/// Renders the message for a failure.
///
/// Length limits are interpolated here rather than baked into configuration.
pub fn render(set: &MessageSet, kind: ErrorKind) -> String {
    let stored = |message: &Option<String>| {
        message.clone().unwrap_or_else(|| FALLBACK.to_string())
    };

    match kind {
        ErrorKind::Empty => stored(&set.empty),
        ErrorKind::Invalid => stored(&set.invalid),
        ErrorKind::TooLong(limit) => format!("No more than {limit} characters"),
        ErrorKind::TooShort(limit) => format!("At least {limit} characters"),
        ErrorKind::Unchecked => stored(&set.unchecked),
        ErrorKind::Unselected => stored(&set.unselected),
        ErrorKind::AlreadyExists => stored(&set.already_exists),
    }
}
