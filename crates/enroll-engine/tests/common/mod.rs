#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use enroll_core::rules::RuleOverrides;
use enroll_engine::constants::attr;
use enroll_engine::{
    ApiError, Document, Field, Form, InputKind, MemberApi, MemberRecord, SignupPayload,
    SignupValidation,
};

pub const SELECTOR: &str = "#form-register";

/// Remote double: serves a fixed record list and captures create payloads.
/// The shared handles stay observable after the engine takes ownership.
pub struct FakeApi {
    pub records: Vec<MemberRecord>,
    pub created: Arc<Mutex<Vec<SignupPayload>>>,
    pub list_calls: Arc<Mutex<usize>>,
    pub fail_list: bool,
    pub fail_create: bool,
}

impl FakeApi {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            created: Arc::new(Mutex::new(Vec::new())),
            list_calls: Arc::new(Mutex::new(0)),
            fail_list: false,
            fail_create: false,
        }
    }

    pub fn with_records(records: Vec<MemberRecord>) -> Self {
        Self {
            records,
            ..Self::empty()
        }
    }
}

#[async_trait]
impl MemberApi for FakeApi {
    async fn list(&self) -> Result<Vec<MemberRecord>, ApiError> {
        *self.list_calls.lock().unwrap() += 1;
        if self.fail_list {
            return Err(ApiError::UnexpectedStatus(503));
        }
        Ok(self.records.clone())
    }

    async fn create(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        if self.fail_create {
            return Err(ApiError::UnexpectedStatus(500));
        }
        self.created.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// The full registration form as the page renders it.
pub fn registration_form() -> Form {
    Form::builder(SELECTOR)
        .control(attr::NAME, InputKind::Text)
        .control(attr::SECOND_NAME, InputKind::Text)
        .control(attr::PHONE, InputKind::Tel)
        .control(attr::EMAIL, InputKind::Email)
        .control(attr::PASSWORD, InputKind::Password)
        .control(attr::TAX_ID, InputKind::Text)
        .control(attr::MESSAGE, InputKind::Text)
        .checkbox(attr::AGREEMENT, "terms")
        .checkbox(attr::AGREEMENT, "newsletter")
        .select(attr::SELECT)
        .select(attr::SELECT)
        .control(attr::UPLOAD, InputKind::File)
        .control(attr::PASSWORD_TOGGLE, InputKind::Button)
        .submit()
        .build()
}

pub fn bind(form: Form, api: FakeApi) -> SignupValidation {
    bind_with(form, api, &RuleOverrides::default())
}

pub fn bind_with(form: Form, api: FakeApi, overrides: &RuleOverrides) -> SignupValidation {
    let mut document = Document::new();
    document.insert(form);
    SignupValidation::bind(&mut document, SELECTOR, overrides, Box::new(api))
}

/// Fills every field of [`registration_form`] with passing values.
pub fn fill_valid(signup: &mut SignupValidation) {
    signup.input(Field::FirstName, "Ada");
    signup.input(Field::SecondName, "Lovelace");
    signup.input(Field::Phone, "291234567");
    signup.input(Field::Email, "ada@example.com");
    signup.input(Field::Password, "correct-horse");
    signup.input(Field::TaxId, "123456789");
    signup.input(Field::Message, "Looking forward to working with you");

    let form = signup.form_mut().expect("engine is bound");
    for member in form.group_mut(attr::AGREEMENT).expect("agreements") {
        member.set_checked(true);
    }
    for member in form.group_mut(attr::SELECT).expect("selects") {
        member.select(1);
    }
}
