//! Raw form values as typed by the user.

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::error::InputError;
use crate::field::Field;

/// Snapshot of the values currently entered on a form.
///
/// ## Invariants
/// - Values are stored exactly as typed; no trimming or normalisation.
/// - `name` is `None` on forms without a name field. Validators treat an
///   absent name as the empty string.
/// - The password buffer is zeroed on drop and never appears in `Debug`
///   output.
///
/// # Examples
/// ```
/// use form_validation::{Field, FormInput};
///
/// let input = FormInput::registration("Al", "a@b.co", "abcdefgh");
/// assert_eq!(input.value(Field::Name), Some("Al"));
/// assert!(!format!("{input:?}").contains("abcdefgh"));
/// ```
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "FormInputDto")]
pub struct FormInput {
    name: Option<String>,
    email: String,
    password: Zeroizing<String>,
}

impl FormInput {
    /// Values for the registration form.
    pub fn registration(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Values for the sign-in form, which has no name field.
    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Parse a JSON document such as `{"email": "a@b.co", "password": "x"}`.
    ///
    /// Missing `email` or `password` keys read as empty strings; a missing
    /// `name` stays absent.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Parse`] when the document is not valid JSON or
    /// carries keys other than `name`, `email` and `password`.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        serde_json::from_str(json).map_err(|e| InputError::Parse {
            message: e.to_string(),
        })
    }

    /// Display name, when the form has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Email address as typed.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as typed.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Current value of `field`; `None` only for an absent name.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name(),
            Field::Email => Some(self.email()),
            Field::Password => Some(self.password()),
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        let value = raw.into();
        match field {
            Field::Name => self.name = Some(value),
            Field::Email => self.email = value,
            Field::Password => self.password = Zeroizing::new(value),
        }
    }
}

impl fmt::Debug for FormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct FormInputDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl From<FormInputDto> for FormInput {
    fn from(value: FormInputDto) -> Self {
        let FormInputDto {
            name,
            email,
            password,
        } = value;
        Self {
            name,
            email,
            password: Zeroizing::new(password),
        }
    }
}
