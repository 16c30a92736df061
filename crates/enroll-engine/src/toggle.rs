//! Password visibility toggle.

use crate::constants::{attr, classes};
use crate::form::{Form, InputKind};

/// Flips the password control between hidden and plain text and toggles the
/// `active` marker on the toggle control. No-op when the form has no toggle
/// or no password control.
pub fn toggle(form: &mut Form) {
    if form.single(attr::PASSWORD_TOGGLE).is_none() {
        return;
    }

    let Some(password) = form.single_mut(attr::PASSWORD) else {
        return;
    };
    let flipped = match password.kind() {
        InputKind::Password => InputKind::Text,
        _ => InputKind::Password,
    };
    password.set_kind(flipped);

    if let Some(control) = form.single_mut(attr::PASSWORD_TOGGLE) {
        control.toggle_class(classes::ACTIVE);
    }
}
