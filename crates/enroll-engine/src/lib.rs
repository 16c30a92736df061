//! # enroll-engine
//!
//! Validation engine for the registration form: binds field slots of a
//! rendered form, checks them against a merged rule table on submit, and —
//! only when every field passes — runs the remote sequence: duplicate check
//! by tax id, then create. Field checks and presentation never leave the
//! process; the network is reached exclusively through the [`MemberApi`]
//! seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use enroll_core::rules::RuleOverrides;
//! use enroll_engine::constants::attr;
//! use enroll_engine::{
//!     Document, Field, Form, HttpMemberApi, InputKind, SignupValidation,
//! };
//!
//! // The page renders the form; the model mirrors it.
//! let mut document = Document::new();
//! document.insert(
//!     Form::builder("#form-register")
//!         .control(attr::NAME, InputKind::Text)
//!         .control(attr::PHONE, InputKind::Tel)
//!         .submit()
//!         .build(),
//! );
//!
//! let mut signup = SignupValidation::bind(
//!     &mut document,
//!     "#form-register",
//!     &RuleOverrides::default(),
//!     Box::new(HttpMemberApi::default()),
//! );
//!
//! // Typed input goes through the field's mask.
//! signup.input(Field::Phone, "291234567");
//! let form = signup.form().unwrap();
//! assert_eq!(form.single(attr::PHONE).unwrap().value(), "+375(29)123-45-67");
//! ```
//!
//! Submission is async and resolves every failure into form state:
//!
//! ```rust,no_run
//! # use enroll_core::rules::RuleOverrides;
//! # use enroll_engine::{Document, HttpMemberApi, SignupValidation};
//! # async fn run() {
//! # let mut document = Document::new();
//! # let mut signup = SignupValidation::bind(
//! #     &mut document,
//! #     "#form-register",
//! #     &RuleOverrides::default(),
//! #     Box::new(HttpMemberApi::default()),
//! # );
//! let outcome = signup.submit().await;
//! # drop(outcome);
//! # }
//! ```

pub mod constants;
pub mod engine;
pub mod form;
pub mod remote;
pub mod toggle;

pub use engine::{Field, SignupValidation, SubmitOutcome};
pub use form::{Control, Document, Form, FormBuilder, InputKind, Slot};
pub use remote::{ApiError, HttpMemberApi, MemberApi, MemberRecord, SignupPayload};
