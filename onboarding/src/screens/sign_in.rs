//! "Sign In" screen: email and password.

use form_validation::{Field, ValidationPolicy};

use super::{FormScreen, SubmitOutcome};
use crate::navigation::Route;

/// Sign-in screen state.
#[derive(Debug, Clone)]
pub struct SignInScreen {
    form: FormScreen,
}

impl SignInScreen {
    /// Heading shown above the form.
    pub const TITLE: &'static str = "Sign In";
    /// Label of the link to the registration screen.
    pub const LINK_LABEL: &'static str = "Go to Sign Up";

    /// Fresh screen using the sign-in policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::sign_in())
    }

    /// Fresh screen using a tuned policy.
    #[must_use]
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            form: FormScreen::new(policy),
        }
    }

    /// Record the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.set_field(Field::Email, value);
    }

    /// Record the password field.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.set_field(Field::Password, value);
    }

    /// Validate and, when clean, accept the form.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    /// Shared form state.
    #[must_use]
    pub const fn form(&self) -> &FormScreen {
        &self.form
    }

    /// Mutable form state for generic field edits.
    pub const fn form_mut(&mut self) -> &mut FormScreen {
        &mut self.form
    }

    /// Destination of the screen's navigation link.
    #[must_use]
    pub const fn link(&self) -> Route {
        Route::Register
    }
}

impl Default for SignInScreen {
    fn default() -> Self {
        Self::new()
    }
}
