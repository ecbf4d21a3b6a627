//! Field-level validation outcome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Failing fields mapped to human-readable messages.
///
/// An absent key means the field passed. An empty result means the form
/// may be submitted. Iteration follows on-screen field order.
///
/// Serialises as a plain JSON object:
///
/// ```
/// use form_validation::{Field, ValidationResult};
///
/// let result: ValidationResult = [(Field::Email, "Invalid email".to_owned())]
///     .into_iter()
///     .collect();
/// assert_eq!(
///     serde_json::to_string(&result).expect("serialises"),
///     r#"{"email":"Invalid email"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult(BTreeMap<Field, String>);

impl ValidationResult {
    /// Return `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return `true` when the form may be submitted.
    ///
    /// Same as [`Self::is_empty`]; reads better at submit sites.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Return `true` when `field` failed.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields in on-screen order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Failing fields and their messages in on-screen order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(Field, String)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationResult {
    type Item = (Field, String);
    type IntoIter = std::collections::btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
