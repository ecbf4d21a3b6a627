//! Form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFieldError;

/// A field that can appear on the registration or sign-in form.
///
/// Ordering follows the on-screen order, so error mappings keyed by
/// [`Field`] iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Display name; registration only.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
}

impl Field {
    /// Every field in on-screen order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Password];

    /// Stable lower-case key used in serialised error mappings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseFieldError {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("name", Field::Name)]
    #[case("Email", Field::Email)]
    #[case(" password ", Field::Password)]
    fn parses_field_names(#[case] raw: &str, #[case] expected: Field) {
        assert_eq!(raw.parse::<Field>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "avatar".parse::<Field>().expect_err("avatar is not validated");
        assert_eq!(err.value, "avatar");
    }

    #[test]
    fn ordering_matches_screen_order() {
        let mut shuffled = [Field::Password, Field::Name, Field::Email];
        shuffled.sort();
        assert_eq!(shuffled, Field::ALL);
    }
}
