//! # enroll-core
//!
//! Pure validation domain for the registration form: typed field rules with
//! override merging, per-field checks, error messages, and input masks.
//!
//! Nothing in this crate touches a form surface or the network. Checks take a
//! value and a rule and return an [`Outcome`]; turning an outcome into
//! presentation is the engine's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use enroll_core::checks::{self, Outcome};
//! use enroll_core::messages::ErrorKind;
//! use enroll_core::rules::{PhoneOverride, RuleOverrides, RuleSet};
//!
//! let rules = RuleSet::default();
//! assert_eq!(
//!     checks::required_text("", &rules.first_name),
//!     Outcome::Invalid(ErrorKind::Empty),
//! );
//! assert_eq!(checks::required_text("Ada", &rules.first_name), Outcome::Valid);
//!
//! // Overrides replace leaves; everything unspecified keeps its default.
//! let rules = rules.merged(&RuleOverrides {
//!     phone: PhoneOverride {
//!         is_required: Some(false),
//!         ..PhoneOverride::default()
//!     },
//!     ..RuleOverrides::default()
//! });
//! assert!(!rules.phone.is_required);
//! assert_eq!(rules.phone.mask_length, 17);
//! ```

pub mod checks;
pub mod mask;
pub mod messages;
pub mod rules;

pub use checks::Outcome;
pub use mask::MaskSpec;
pub use messages::{render, ErrorKind, MessageSet};
pub use rules::{RuleOverrides, RuleSet};
