//! The form surface: an in-memory model of the rendered registration form.
//!
//! This is the engine's side of the contract with the page. Validation logic
//! never touches it directly — checks are pure, and the engine turns their
//! outcomes into mutations here: class-list changes on control wrappers,
//! error-container content, the submit control's disabled flag.
//!
//! Success and error are mutually exclusive by construction: setting one
//! removes the other.

use std::collections::{BTreeMap, BTreeSet};

use crate::constants::classes;

/// What kind of input a control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Email,
    Password,
    Checkbox,
    Select,
    File,
    Button,
}

/// One input element together with its enclosing wrapper and error container.
#[derive(Debug, Clone)]
pub struct Control {
    kind: InputKind,
    value: String,
    checked: bool,
    selected_index: usize,
    files: Vec<String>,
    classes: BTreeSet<String>,
    error_html: String,
}

impl Control {
    /// Creates a control of the given kind.
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            value: String::new(),
            checked: false,
            selected_index: 0,
            files: Vec::new(),
            classes: BTreeSet::new(),
            error_html: String::new(),
        }
    }

    /// Creates a control with a value attribute (checkboxes).
    pub fn with_value(kind: InputKind, value: impl Into<String>) -> Self {
        let mut control = Self::new(kind);
        control.value = value.into();
        control
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: InputKind) {
        self.kind = kind;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Selects an option; index 0 is the placeholder.
    pub fn select(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Adds a file to the selection by name.
    pub fn attach_file(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    /// Current content of the error container.
    pub fn error_html(&self) -> &str {
        &self.error_html
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn toggle_class(&mut self, class: &str) {
        if !self.classes.remove(class) {
            self.classes.insert(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Marks the wrapper as failed and replaces the error container content.
    /// The message may carry markup and is rendered as-is.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_html = message.into();
        self.classes.remove(classes::SUCCESS);
        self.add_class(classes::ERROR);
    }

    /// Marks the wrapper as passed.
    pub fn set_success(&mut self) {
        self.classes.remove(classes::ERROR);
        self.add_class(classes::SUCCESS);
    }

    /// Drops success and error marking, back to neutral.
    pub fn clear_presentation(&mut self) {
        self.classes.remove(classes::SUCCESS);
        self.classes.remove(classes::ERROR);
    }

    pub fn is_error(&self) -> bool {
        self.has_class(classes::ERROR)
    }

    pub fn is_success(&self) -> bool {
        self.has_class(classes::SUCCESS)
    }

    /// Resets user state (value, check, selection, files) and presentation.
    /// The value attribute of a checkbox is markup, not user state, and stays.
    pub(crate) fn reset(&mut self) {
        match self.kind {
            InputKind::Checkbox => self.checked = false,
            InputKind::Select => self.selected_index = 0,
            InputKind::File => self.files.clear(),
            _ => self.value.clear(),
        }
        self.clear_presentation();
    }
}

/// A field slot: one control, or a group checked member by member.
#[derive(Debug, Clone)]
pub enum Slot {
    Single(Control),
    Group(Vec<Control>),
}

/// A form found on the page, keyed by the data attributes of its slots.
#[derive(Debug, Clone)]
pub struct Form {
    selector: String,
    slots: BTreeMap<&'static str, Slot>,
    classes: BTreeSet<String>,
    has_submit: bool,
    submit_disabled: bool,
}

impl Form {
    /// Starts building a form reachable under the given selector.
    pub fn builder(selector: impl Into<String>) -> FormBuilder {
        FormBuilder {
            selector: selector.into(),
            slots: BTreeMap::new(),
            has_submit: false,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn slot(&self, attr: &str) -> Option<&Slot> {
        self.slots.get(attr)
    }

    pub(crate) fn slot_mut(&mut self, attr: &str) -> Option<&mut Slot> {
        self.slots.get_mut(attr)
    }

    /// The control in a single slot, if the slot exists and is single.
    pub fn single(&self, attr: &str) -> Option<&Control> {
        match self.slots.get(attr) {
            Some(Slot::Single(control)) => Some(control),
            _ => None,
        }
    }

    pub fn single_mut(&mut self, attr: &str) -> Option<&mut Control> {
        match self.slots.get_mut(attr) {
            Some(Slot::Single(control)) => Some(control),
            _ => None,
        }
    }

    /// The members of a group slot, if the slot exists and is a group.
    pub fn group(&self, attr: &str) -> Option<&[Control]> {
        match self.slots.get(attr) {
            Some(Slot::Group(members)) => Some(members),
            _ => None,
        }
    }

    pub fn group_mut(&mut self, attr: &str) -> Option<&mut [Control]> {
        match self.slots.get_mut(attr) {
            Some(Slot::Group(members)) => Some(members),
            _ => None,
        }
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn has_submit(&self) -> bool {
        self.has_submit
    }

    pub fn submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    pub(crate) fn set_submit_disabled(&mut self, disabled: bool) {
        self.submit_disabled = disabled;
    }
}

/// Assembles a [`Form`] slot by slot.
#[derive(Debug)]
pub struct FormBuilder {
    selector: String,
    slots: BTreeMap<&'static str, Slot>,
    has_submit: bool,
}

impl FormBuilder {
    /// Adds a single control under a data attribute.
    #[must_use]
    pub fn control(mut self, attr: &'static str, kind: InputKind) -> Self {
        self.slots.insert(attr, Slot::Single(Control::new(kind)));
        self
    }

    /// Appends a control to a group slot, creating the group on first use.
    #[must_use]
    pub fn group_member(mut self, attr: &'static str, control: Control) -> Self {
        let slot = self
            .slots
            .entry(attr)
            .or_insert_with(|| Slot::Group(Vec::new()));
        if let Slot::Group(members) = slot {
            members.push(control);
        }
        self
    }

    /// Appends a checkbox with the given value attribute to a group.
    #[must_use]
    pub fn checkbox(self, attr: &'static str, value: &str) -> Self {
        self.group_member(attr, Control::with_value(InputKind::Checkbox, value))
    }

    /// Appends a select to a group.
    #[must_use]
    pub fn select(self, attr: &'static str) -> Self {
        self.group_member(attr, Control::new(InputKind::Select))
    }

    /// Adds the submit control.
    #[must_use]
    pub fn submit(mut self) -> Self {
        self.has_submit = true;
        self
    }

    pub fn build(self) -> Form {
        Form {
            selector: self.selector,
            slots: self.slots,
            classes: BTreeSet::new(),
            has_submit: self.has_submit,
            submit_disabled: false,
        }
    }
}

/// The page: every form the markup rendered.
#[derive(Debug, Default)]
pub struct Document {
    forms: Vec<Form>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, form: Form) {
        self.forms.push(form);
    }

    /// Detaches the form matching a selector, if one is present.
    pub fn take_form(&mut self, selector: &str) -> Option<Form> {
        let at = self.forms.iter().position(|f| f.selector() == selector)?;
        Some(self.forms.remove(at))
    }
}
