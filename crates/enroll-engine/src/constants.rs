//! Stable identifiers shared with the rendered markup and its styling.
//!
//! The class names and data attributes below are a contract with the
//! accompanying stylesheet and templates; renaming one breaks the page even
//! though nothing in this crate would notice.

/// Presentation state classes applied to control wrappers and the form root.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const ERROR: &str = "error";
    pub const SUCCESS: &str = "success";
    pub const LOADING: &str = "loading";
    pub const REQUIRED: &str = "required";
}

/// Data attributes identifying the form's parts.
pub mod attr {
    /// Enclosing wrapper of a single control.
    pub const CONTROL: &str = "data-form-control";
    /// Error container inside a control wrapper.
    pub const ERROR_BOX: &str = "data-form-error";

    pub const NAME: &str = "data-form-name";
    pub const SECOND_NAME: &str = "data-form-second-name";
    pub const PHONE: &str = "data-form-phone";
    pub const PASSWORD: &str = "data-form-password";
    pub const TAX_ID: &str = "data-form-inn";
    pub const EMAIL: &str = "data-form-email";
    pub const MESSAGE: &str = "data-form-message";
    pub const AGREEMENT: &str = "data-form-agreement";
    pub const UPLOAD: &str = "data-form-upload";
    pub const SELECT: &str = "data-form-select";
    pub const SUBMIT: &str = "data-form-submit";
    pub const PASSWORD_TOGGLE: &str = "data-form-password-toggle";
}

/// Default endpoint of the remote member collection.
pub const DEFAULT_BASE_URL: &str = "https://628cd8d6a3fd714fd03a9b7e.mockapi.io/items";
