//! Error types for the form-validation crate.
//!
//! Invalid form values are never errors; they surface as a
//! [`ValidationResult`](crate::ValidationResult). The enums here cover
//! malformed policy tables and unreadable input documents.

use thiserror::Error;

use crate::field::Field;

/// Errors raised while assembling a custom [`ValidationPolicy`](crate::ValidationPolicy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The same field was listed more than once.
    #[error("field '{field}' is listed more than once")]
    DuplicateField {
        /// Field that appeared twice.
        field: Field,
    },

    /// A field was listed without any rules.
    #[error("field '{field}' has no rules")]
    NoRules {
        /// Field missing its rules.
        field: Field,
    },

    /// A field's error message was blank.
    #[error("field '{field}' has an empty error message")]
    EmptyMessage {
        /// Field with the blank message.
        field: Field,
    },

    /// A minimum length of zero can never fail and is rejected.
    #[error("field '{field}' has a minimum length of zero")]
    ZeroMinimum {
        /// Field carrying the zero minimum.
        field: Field,
    },

    /// An override targeted a field the policy does not check.
    #[error("field '{field}' is not checked by this policy")]
    UnknownField {
        /// Field missing from the policy table.
        field: Field,
    },
}

/// Errors raised while reading a [`FormInput`](crate::FormInput) document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The JSON document is malformed or has unexpected keys.
    #[error("invalid form input JSON: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}

/// Returned when a string does not name a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {value}")]
pub struct ParseFieldError {
    /// The rejected input.
    pub value: String,
}

/// Returned when a string does not name a [`PolicyKind`](crate::PolicyKind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation policy '{value}': expected 'registration' or 'sign-in'")]
pub struct ParsePolicyKindError {
    /// The rejected input.
    pub value: String,
}
