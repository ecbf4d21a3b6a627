//! Validation policy overrides loaded via OrthoConfig.

use std::ffi::OsString;

use form_validation::{Field, PolicyError, PolicyKind, ValidationPolicy};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while turning settings into policies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Sources could not be read or merged.
    #[error("failed to load form settings: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },
    /// A minimum length override was zero.
    #[error("{key} must be greater than zero")]
    ZeroMinimum {
        /// Settings key carrying the zero.
        key: &'static str,
    },
    /// The override could not be applied to the policy table.
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Tweaks applied on top of the named validation policies.
///
/// Every key is optional; with nothing set the named policies are used
/// exactly as shipped.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FORM")]
pub struct FormSettings {
    /// Minimum name length on forms that show a name field.
    pub name_min_chars: Option<usize>,
    /// Minimum password length on every form.
    pub password_min_chars: Option<usize>,
    /// Also require an ASCII letter in registration passwords.
    #[ortho_config(default = false)]
    pub require_password_letter: bool,
}

impl FormSettings {
    /// Load settings from configuration files and `FORM_*` environment
    /// variables, ignoring the process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source is malformed.
    pub fn from_environment(program: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(program)]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Named policy for `kind` with these overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroMinimum`] when a minimum is zero.
    pub fn policy(&self, kind: PolicyKind) -> Result<ValidationPolicy, SettingsError> {
        self.apply(kind.policy())
    }

    /// Apply the overrides to `policy`.
    ///
    /// The name override is skipped for policies without a name field.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroMinimum`] when a minimum is zero, or
    /// [`SettingsError::Policy`] when `policy` lacks a password field.
    pub fn apply(&self, base: ValidationPolicy) -> Result<ValidationPolicy, SettingsError> {
        let mut policy = base;
        if let Some(min) = self.name_min_chars {
            ensure_positive("name_min_chars", min)?;
            if policy.checks(Field::Name) {
                policy = policy.with_min_chars(Field::Name, min)?;
            }
        }
        if let Some(min) = self.password_min_chars {
            ensure_positive("password_min_chars", min)?;
            policy = policy.with_min_chars(Field::Password, min)?;
        }
        if self.require_password_letter {
            policy = policy.with_letter_required(Field::Password)?;
        }
        Ok(policy)
    }
}

fn ensure_positive(key: &'static str, min: usize) -> Result<(), SettingsError> {
    if min == 0 {
        Err(SettingsError::ZeroMinimum { key })
    } else {
        Ok(())
    }
}
