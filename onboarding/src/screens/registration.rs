//! "Create Account" screen: name, email, password and an optional avatar.

use form_validation::{Field, ValidationPolicy};
use tracing::{debug, warn};

use super::{FormScreen, SubmitOutcome};
use crate::avatar::{
    AvatarPicker, AvatarSelection, PERMISSION_DENIED_NOTICE, PermissionStatus, PickOutcome,
};
use crate::navigation::Route;

/// Registration screen state.
///
/// The avatar is cosmetic local state: it never takes part in validation.
#[derive(Debug, Clone)]
pub struct RegistrationScreen {
    form: FormScreen,
    avatar: Option<AvatarSelection>,
}

impl RegistrationScreen {
    /// Heading shown above the form.
    pub const TITLE: &'static str = "Create Account";
    /// Label of the link to the sign-in screen.
    pub const LINK_LABEL: &'static str = "Go to Sign In";

    /// Fresh screen using the registration policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::registration())
    }

    /// Fresh screen using a tuned policy.
    #[must_use]
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            form: FormScreen::new(policy),
            avatar: None,
        }
    }

    /// Record the name field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.set_field(Field::Name, value);
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

    /// Currently selected avatar.
    #[must_use]
    pub const fn avatar(&self) -> Option<&AvatarSelection> {
        self.avatar.as_ref()
    }

    /// Ask for media-library access and, when granted, let the user pick an
    /// image.
    ///
    /// Any answer other than [`PermissionStatus::Granted`] yields the
    /// settings notice. A refused or cancelled flow leaves the current avatar
    /// in place.
    pub async fn pick_avatar(&mut self, picker: &dyn AvatarPicker) -> PickOutcome {
        let status = picker.request_permission().await;
        if status != PermissionStatus::Granted {
            warn!(?status, "media library permission not granted");
            return PickOutcome::PermissionDenied {
                notice: PERMISSION_DENIED_NOTICE,
            };
        }

        match picker.pick_image().await.and_then(AvatarSelection::from_uri) {
            Some(selection) => {
                debug!(uri = selection.uri(), "avatar selected");
                self.avatar = Some(selection.clone());
                PickOutcome::Selected(selection)
            }
            None => PickOutcome::Cancelled,
        }
    }

    /// Clear the avatar.
    pub fn remove_avatar(&mut self) {
        self.avatar = None;
    }

    /// Destination of the screen's navigation link.
    #[must_use]
    pub const fn link(&self) -> Route {
        Route::SignIn
    }
}

impl Default for RegistrationScreen {
    fn default() -> Self {
        Self::new()
    }
}
