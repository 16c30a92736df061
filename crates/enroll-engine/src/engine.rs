//! The validation engine: field bindings, the check pass, and the
//! duplicate-checked submission sequence.

use enroll_core::checks::{self, Outcome};
use enroll_core::messages::{self, ErrorKind, MessageSet};
use enroll_core::rules::{RuleOverrides, RuleSet};
use tracing::warn;

use crate::constants::{attr, classes};
use crate::form::{Control, Document, Form, Slot};
use crate::remote::{MemberApi, SignupPayload};

/// The fields the engine knows how to bind, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    SecondName,
    Phone,
    Email,
    Password,
    Message,
    TaxId,
    Selects,
    Agreements,
    Upload,
}

impl Field {
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::SecondName,
        Self::Phone,
        Self::Email,
        Self::Password,
        Self::Message,
        Self::TaxId,
        Self::Selects,
        Self::Agreements,
        Self::Upload,
    ];

    /// The data attribute this field is bound through.
    pub fn attr(self) -> &'static str {
        match self {
            Self::FirstName => attr::NAME,
            Self::SecondName => attr::SECOND_NAME,
            Self::Phone => attr::PHONE,
            Self::Email => attr::EMAIL,
            Self::Password => attr::PASSWORD,
            Self::Message => attr::MESSAGE,
            Self::TaxId => attr::TAX_ID,
            Self::Selects => attr::SELECT,
            Self::Agreements => attr::AGREEMENT,
            Self::Upload => attr::UPLOAD,
        }
    }
}

/// How a submission attempt ended. Informational — every branch has already
/// been resolved into form state by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The engine is not bound to a form; nothing happened.
    Inert,
    /// At least one field check failed; no network activity.
    Rejected,
    /// The tax id already exists remotely; no create request was made.
    Duplicate,
    /// The record was created and the form was cleared.
    Created,
    /// A remote step failed; logged, not shown to the user.
    RemoteFailed,
}

/// Validation engine bound to one registration form.
///
/// Construction never fails: a selector with no matching form yields an inert
/// engine that ignores every call, so a page without the form costs nothing.
pub struct SignupValidation {
    form: Option<Form>,
    bound: Vec<Field>,
    rules: RuleSet,
    api: Box<dyn MemberApi>,
}

impl std::fmt::Debug for SignupValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupValidation")
            .field("bound", &self.bound)
            .field("inert", &self.form.is_none())
            .finish_non_exhaustive()
    }
}

impl SignupValidation {
    /// Binds the engine to the form matching `selector`.
    ///
    /// Every known field slot present in the form is bound; absent slots are
    /// skipped. Overrides are merged onto the default rule table leaf by
    /// leaf, and each bound required field's wrapper gets the `required`
    /// marker.
    pub fn bind(
        document: &mut Document,
        selector: &str,
        overrides: &RuleOverrides,
        api: Box<dyn MemberApi>,
    ) -> Self {
        let Some(form) = document.take_form(selector) else {
            return Self {
                form: None,
                bound: Vec::new(),
                rules: RuleSet::default(),
                api,
            };
        };

        let bound: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| form.slot(field.attr()).is_some())
            .collect();
        let rules = RuleSet::default().merged(overrides);

        let mut engine = Self {
            form: Some(form),
            bound,
            rules,
            api,
        };
        engine.mark_required();
        engine
    }

    /// Whether construction found no form to bind.
    pub fn is_inert(&self) -> bool {
        self.form.is_none()
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.form.as_mut()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Writes a value into a single-control field through its input mask.
    /// Fields without a mask take the text verbatim.
    pub fn input(&mut self, field: Field, text: &str) {
        let value = match field {
            Field::Phone => self.rules.phone.mask.apply(text),
            Field::TaxId => match &self.rules.tax_id.mask {
                Some(mask) => mask.apply(text),
                None => text.to_string(),
            },
            _ => text.to_string(),
        };

        if let Some(form) = self.form.as_mut() {
            if let Some(control) = form.single_mut(field.attr()) {
                control.set_value(value);
            }
        }
    }

    /// Runs a full submission attempt.
    ///
    /// Every bound field is checked and presented in one pass. Only a fully
    /// valid form reaches the network: a duplicate check against the remote
    /// collection, then — strictly after a negative result — the create
    /// request. The form is marked loading and the submit control disabled
    /// for the whole remote sequence, and both are restored on every exit
    /// path. Remote failures are logged and otherwise swallowed; the user
    /// sees no message for them.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(form) = self.form.as_mut() else {
            return SubmitOutcome::Inert;
        };

        if !run_checks(form, &self.bound, &self.rules) {
            return SubmitOutcome::Rejected;
        }

        let payload = collect_payload(form);

        form.add_class(classes::LOADING);
        form.set_submit_disabled(true);

        let outcome = match self.api.list().await {
            Err(error) => {
                warn!(step = "duplicate-check", %error, "registration request failed");
                SubmitOutcome::RemoteFailed
            }
            Ok(records) if records.iter().any(|record| record.inn == payload.inn) => {
                if let Some(control) = form.single_mut(Field::TaxId.attr()) {
                    let message =
                        messages::render(&self.rules.tax_id.messages, ErrorKind::AlreadyExists);
                    control.set_error(message);
                }
                SubmitOutcome::Duplicate
            }
            Ok(_) => match self.api.create(&payload).await {
                Ok(()) => {
                    clear_controls(form, &self.bound);
                    SubmitOutcome::Created
                }
                Err(error) => {
                    warn!(step = "create", %error, "registration request failed");
                    SubmitOutcome::RemoteFailed
                }
            },
        };

        form.remove_class(classes::LOADING);
        form.set_submit_disabled(false);
        outcome
    }

    fn mark_required(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        for field in &self.bound {
            if !is_required(&self.rules, *field) {
                continue;
            }
            match form.slot_mut(field.attr()) {
                Some(Slot::Single(control)) => control.add_class(classes::REQUIRED),
                Some(Slot::Group(members)) => {
                    for member in members {
                        member.add_class(classes::REQUIRED);
                    }
                }
                None => {}
            }
        }
    }
}

fn is_required(rules: &RuleSet, field: Field) -> bool {
    match field {
        Field::FirstName => rules.first_name.is_required,
        Field::SecondName => rules.second_name.is_required,
        Field::Phone => rules.phone.is_required,
        Field::Email => rules.email.is_required,
        Field::Password => rules.password.is_required,
        Field::Message => rules.message.is_required,
        Field::TaxId => rules.tax_id.is_required,
        Field::Selects => rules.selects.is_required,
        Field::Agreements => rules.agreements.is_required,
        Field::Upload => rules.upload.is_required,
    }
}

/// Presents an outcome on a control. Returns whether the check passed.
fn present(control: &mut Control, outcome: Outcome, messages: &MessageSet) -> bool {
    match outcome {
        Outcome::Valid => {
            control.set_success();
            true
        }
        Outcome::Invalid(kind) => {
            control.set_error(messages::render(messages, kind));
            false
        }
    }
}

fn check_single(
    form: &mut Form,
    field: Field,
    check: impl Fn(&str) -> Outcome,
    messages: &MessageSet,
) -> bool {
    let Some(control) = form.single_mut(field.attr()) else {
        return true;
    };
    let outcome = check(control.value().trim());
    present(control, outcome, messages)
}

fn check_group(
    form: &mut Form,
    field: Field,
    check: impl Fn(&Control) -> Outcome,
    messages: &MessageSet,
) -> bool {
    let Some(members) = form.group_mut(field.attr()) else {
        return true;
    };

    let mut valid = true;
    for member in members.iter_mut() {
        let outcome = check(member);
        if !present(member, outcome, messages) {
            valid = false;
        }
    }
    valid
}

fn check_upload(form: &mut Form, rules: &RuleSet) -> bool {
    let Some(control) = form.single_mut(Field::Upload.attr()) else {
        return true;
    };
    let outcome = checks::upload(control.files(), &rules.upload);
    present(control, outcome, &rules.upload.messages)
}

/// Checks every bound field. All checks run — an early failure never hides
/// later fields' markings.
fn run_checks(form: &mut Form, bound: &[Field], rules: &RuleSet) -> bool {
    let mut results = Vec::with_capacity(bound.len());

    for field in bound {
        let valid = match field {
            Field::FirstName => check_single(
                form,
                *field,
                |v| checks::required_text(v, &rules.first_name),
                &rules.first_name.messages,
            ),
            Field::SecondName => check_single(
                form,
                *field,
                |v| checks::required_text(v, &rules.second_name),
                &rules.second_name.messages,
            ),
            Field::Phone => check_single(
                form,
                *field,
                |v| checks::phone(v, &rules.phone),
                &rules.phone.messages,
            ),
            Field::Email => check_single(
                form,
                *field,
                |v| checks::email(v, &rules.email),
                &rules.email.messages,
            ),
            Field::Password => check_single(
                form,
                *field,
                |v| checks::length_bounded(v, &rules.password),
                &rules.password.messages,
            ),
            Field::Message => check_single(
                form,
                *field,
                |v| checks::length_bounded(v, &rules.message),
                &rules.message.messages,
            ),
            Field::TaxId => check_single(
                form,
                *field,
                |v| checks::length_bounded(v, &rules.tax_id),
                &rules.tax_id.messages,
            ),
            Field::Selects => check_group(
                form,
                *field,
                |member| checks::selection(member.selected_index(), &rules.selects),
                &rules.selects.messages,
            ),
            Field::Agreements => check_group(
                form,
                *field,
                |member| checks::agreement(member.checked(), &rules.agreements),
                &rules.agreements.messages,
            ),
            Field::Upload => check_upload(form, rules),
        };
        results.push(valid);
    }

    !results.contains(&false)
}

/// Collects current values into the wire payload. The newsletter flag comes
/// from the agreements checkbox carrying the `newsletter` value.
fn collect_payload(form: &Form) -> SignupPayload {
    let value = |attr: &str| {
        form.single(attr)
            .map(|control| control.value().to_string())
            .unwrap_or_default()
    };

    let newsletter = form
        .group(Field::Agreements.attr())
        .is_some_and(|members| {
            members
                .iter()
                .any(|member| member.value() == "newsletter" && member.checked())
        });

    SignupPayload {
        name: value(Field::FirstName.attr()),
        second_name: value(Field::SecondName.attr()),
        email: value(Field::Email.attr()),
        password: value(Field::Password.attr()),
        phone: value(Field::Phone.attr()),
        inn: value(Field::TaxId.attr()),
        newsletter,
    }
}

fn clear_controls(form: &mut Form, bound: &[Field]) {
    for field in bound {
        match form.slot_mut(field.attr()) {
            Some(Slot::Single(control)) => control.reset(),
            Some(Slot::Group(members)) => {
                for member in members {
                    member.reset();
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InputKind;
    use crate::remote::HttpMemberApi;
    use enroll_core::rules::PhoneOverride;

    fn bind(form: Form, overrides: &RuleOverrides) -> SignupValidation {
        let mut document = Document::new();
        document.insert(form);
        SignupValidation::bind(
            &mut document,
            "#form-register",
            overrides,
            Box::new(HttpMemberApi::default()),
        )
    }

    fn small_form() -> Form {
        Form::builder("#form-register")
            .control(attr::NAME, InputKind::Text)
            .control(attr::PHONE, InputKind::Tel)
            .control(attr::UPLOAD, InputKind::File)
            .checkbox(attr::AGREEMENT, "terms")
            .submit()
            .build()
    }

    #[test]
    fn test_missing_form_is_inert() {
        let mut document = Document::new();
        let engine = SignupValidation::bind(
            &mut document,
            "#form-register",
            &RuleOverrides::default(),
            Box::new(HttpMemberApi::default()),
        );

        assert!(engine.is_inert());
        assert!(engine.form().is_none());
    }

    #[test]
    fn test_bind_skips_absent_slots() {
        let engine = bind(small_form(), &RuleOverrides::default());
        assert!(!engine.is_inert());

        let form = engine.form().unwrap();
        assert!(form.single(attr::NAME).is_some());
        assert!(form.single(attr::EMAIL).is_none());
    }

    #[test]
    fn test_bind_marks_required_fields() {
        let engine = bind(small_form(), &RuleOverrides::default());
        let form = engine.form().unwrap();

        assert!(form.single(attr::NAME).unwrap().has_class(classes::REQUIRED));
        assert!(form.group(attr::AGREEMENT).unwrap()[0].has_class(classes::REQUIRED));
        // Upload defaults to optional.
        assert!(!form.single(attr::UPLOAD).unwrap().has_class(classes::REQUIRED));
    }

    #[test]
    fn test_required_marks_respect_overrides() {
        let overrides = RuleOverrides {
            phone: PhoneOverride {
                is_required: Some(false),
                ..PhoneOverride::default()
            },
            ..RuleOverrides::default()
        };

        let engine = bind(small_form(), &overrides);
        let form = engine.form().unwrap();
        assert!(!form.single(attr::PHONE).unwrap().has_class(classes::REQUIRED));
        assert!(form.single(attr::NAME).unwrap().has_class(classes::REQUIRED));
    }

    #[test]
    fn test_input_applies_phone_mask() {
        let mut engine = bind(small_form(), &RuleOverrides::default());

        engine.input(Field::Phone, "291234567");
        engine.input(Field::FirstName, "Ada");

        let form = engine.form().unwrap();
        assert_eq!(form.single(attr::PHONE).unwrap().value(), "+375(29)123-45-67");
        assert_eq!(form.single(attr::NAME).unwrap().value(), "Ada");
    }

    #[test]
    fn test_input_on_inert_engine_is_a_no_op() {
        let mut document = Document::new();
        let mut engine = SignupValidation::bind(
            &mut document,
            "#form-register",
            &RuleOverrides::default(),
            Box::new(HttpMemberApi::default()),
        );
        engine.input(Field::FirstName, "Ada");
        assert!(engine.form().is_none());
    }
}
