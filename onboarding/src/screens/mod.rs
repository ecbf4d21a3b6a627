//! Per-screen form state and submit gating.
//!
//! Each screen owns one [`FormScreen`]: the values typed so far, the errors
//! from the last submit, and the policy in force. A screen is built fresh on
//! entry and dropped on exit; nothing is shared between screens.

mod registration;
mod sign_in;

use form_validation::{Field, FormInput, ValidationPolicy, ValidationResult};
use tracing::{debug, info};

pub use self::registration::RegistrationScreen;
pub use self::sign_in::SignInScreen;

/// Result of pressing the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed. Submission itself does nothing further.
    Accepted,
    /// At least one field failed; messages are shown inline.
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    /// Return `true` when the form was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Form state owned by one active screen.
///
/// ## Invariants
/// - `errors` is exactly the result of the last [`FormScreen::submit`];
///   edits leave it untouched until the next submit.
/// - Fields the policy does not check are never stored.
#[derive(Debug, Clone)]
pub struct FormScreen {
    policy: ValidationPolicy,
    input: FormInput,
    errors: ValidationResult,
}

impl FormScreen {
    /// Start an empty form for `policy`.
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        let input = if policy.checks(Field::Name) {
            FormInput::registration("", "", "")
        } else {
            FormInput::sign_in("", "")
        };
        Self {
            policy,
            input,
            errors: ValidationResult::default(),
        }
    }

    /// Record an edit to `field`.
    ///
    /// Edits to a name field on a form without one are dropped.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if field == Field::Name && !self.policy.checks(Field::Name) {
            debug!(%field, "ignoring edit to a field this form does not show");
            return;
        }
        self.input.set(field, value);
    }

    /// Validate the current values and store the errors.
    ///
    /// Submission proceeds only when no field fails, and proceeding is a
    /// no-op: nothing leaves the device.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = self.policy.validate(&self.input);
        debug!(
            checked = self.policy.fields().count(),
            failed = errors.len(),
            "form validated"
        );
        self.errors = errors.clone();
        if errors.is_submittable() {
            info!("form accepted; submission is a no-op");
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Inline message for `field` from the last submit.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Errors from the last submit.
    #[must_use]
    pub const fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Values typed so far.
    #[must_use]
    pub const fn input(&self) -> &FormInput {
        &self.input
    }

    /// Policy applied on submit.
    #[must_use]
    pub const fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }
}
