//! Client-side validation for the registration and sign-in forms.
//!
//! The crate turns a snapshot of raw form values into a per-field error
//! mapping. It performs no I/O and never fails on bad input: an invalid form
//! is ordinary data, and callers submit only when the mapping is empty.
//!
//! # Overview
//!
//! - [`FormInput`] holds the raw values a user typed.
//! - [`ValidationPolicy`] is a small table of per-field [`Rule`]s with one
//!   message per field. Two named policies ship with the crate:
//!   [`ValidationPolicy::registration`] and [`ValidationPolicy::sign_in`].
//! - [`ValidationResult`] maps each failing [`Field`] to its message.
//!
//! # Example
//!
//! ```
//! use form_validation::{Field, FormInput, ValidationPolicy, validate};
//!
//! let input = FormInput::sign_in("x@y.com", "12345678");
//! let result = validate(&ValidationPolicy::sign_in(), &input);
//!
//! assert!(!result.is_submittable());
//! assert!(result.contains(Field::Password));
//! assert!(!result.contains(Field::Email));
//! ```

mod error;
mod field;
mod input;
mod policy;
mod result;
mod rules;

pub use error::{InputError, ParseFieldError, ParsePolicyKindError, PolicyError};
pub use field::Field;
pub use input::FormInput;
pub use policy::{FieldPolicy, PolicyBuilder, PolicyKind, ValidationPolicy};
pub use result::ValidationResult;
pub use rules::{Rule, is_email_shaped};

/// Validate `input` against `policy`.
///
/// Equivalent to [`ValidationPolicy::validate`]; provided as a free function
/// for callers that hold the policy and input separately.
#[must_use]
pub fn validate(policy: &ValidationPolicy, input: &FormInput) -> ValidationResult {
    policy.validate(input)
}
