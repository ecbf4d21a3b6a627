//! Per-field rule tables and the named registration and sign-in policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParsePolicyKindError, PolicyError};
use crate::field::Field;
use crate::input::FormInput;
use crate::result::ValidationResult;
use crate::rules::Rule;

/// Placeholder substituted with the field's minimum length in messages.
const MIN_PLACEHOLDER: &str = "{min}";

/// Rules and message for one field.
///
/// The message is shown whenever any rule rejects the value. A `{min}`
/// placeholder renders as the field's [`Rule::MinChars`] bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolicy {
    field: Field,
    rules: Vec<Rule>,
    message: String,
}

impl FieldPolicy {
    /// Field the rules apply to.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Rules checked in order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Message with placeholders rendered.
    #[must_use]
    pub fn message(&self) -> String {
        match self.min_chars() {
            Some(min) => self.message.replace(MIN_PLACEHOLDER, &min.to_string()),
            None => self.message.clone(),
        }
    }

    /// Minimum length enforced on this field, if any.
    #[must_use]
    pub fn min_chars(&self) -> Option<usize> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::MinChars(min) => Some(*min),
            _ => None,
        })
    }

    fn accepts(&self, value: &str) -> bool {
        self.rules.iter().all(|rule| rule.accepts(value))
    }

    fn entry(field: Field, rules: Vec<Rule>, message: &str) -> Self {
        Self {
            field,
            rules,
            message: message.to_owned(),
        }
    }
}

/// Which named policy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Name, email and password; password needs only a length.
    Registration,
    /// Email and password; password also needs an ASCII letter.
    SignIn,
}

impl PolicyKind {
    /// Build the policy this kind names.
    #[must_use]
    pub fn policy(self) -> ValidationPolicy {
        match self {
            Self::Registration => ValidationPolicy::registration(),
            Self::SignIn => ValidationPolicy::sign_in(),
        }
    }

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::SignIn => "sign-in",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ParsePolicyKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "registration" | "register" => Ok(Self::Registration),
            "sign-in" | "signin" | "sign_in" => Ok(Self::SignIn),
            _ => Err(ParsePolicyKindError {
                value: value.to_owned(),
            }),
        }
    }
}

/// A table of per-field rules.
///
/// Fields missing from the table are never checked and never reported.
///
/// ## Invariants
/// - Each field appears at most once.
/// - Each entry has at least one rule and a non-blank message.
/// - No entry carries `MinChars(0)`.
///
/// # Examples
/// ```
/// use form_validation::{Field, FormInput, ValidationPolicy};
///
/// let policy = ValidationPolicy::registration();
/// let result = policy.validate(&FormInput::registration("", "bad", "short"));
///
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.get(Field::Email), Some("Invalid email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    entries: Vec<FieldPolicy>,
}

impl ValidationPolicy {
    /// Registration rules: name of at least 2 characters, email shape,
    /// password of at least 8 characters.
    #[must_use]
    pub fn registration() -> Self {
        Self {
            entries: vec![
                FieldPolicy::entry(
                    Field::Name,
                    vec![Rule::Required, Rule::MinChars(2)],
                    "Name must be at least {min} characters",
                ),
                email_entry(),
                FieldPolicy::entry(
                    Field::Password,
                    vec![Rule::Required, Rule::MinChars(8)],
                    "Password must be at least {min} characters",
                ),
            ],
        }
    }

    /// Sign-in rules: email shape, password of at least 8 characters that
    /// contains an ASCII letter.
    #[must_use]
    pub fn sign_in() -> Self {
        Self {
            entries: vec![
                email_entry(),
                FieldPolicy::entry(
                    Field::Password,
                    vec![Rule::Required, Rule::MinChars(8), Rule::ContainsAsciiLetter],
                    "Password must be at least {min} chars",
                ),
            ],
        }
    }

    /// Start an empty custom table.
    #[must_use]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Check `input` and report every failing field.
    ///
    /// Pure: the input is only read, and equal inputs give equal results.
    #[must_use]
    pub fn validate(&self, input: &FormInput) -> ValidationResult {
        self.entries
            .iter()
            .filter(|entry| !entry.accepts(input.value(entry.field).unwrap_or_default()))
            .map(|entry| (entry.field, entry.message()))
            .collect()
    }

    /// Fields this policy checks, in table order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.iter().map(FieldPolicy::field)
    }

    /// Return `true` when the policy checks `field`.
    #[must_use]
    pub fn checks(&self, field: Field) -> bool {
        self.entry(field).is_some()
    }

    /// Rules and message for `field`, if the policy checks it.
    #[must_use]
    pub fn entry(&self, field: Field) -> Option<&FieldPolicy> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    /// Replace the minimum length enforced on `field`.
    ///
    /// Adds a [`Rule::MinChars`] when the field had none.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroMinimum`] for `min == 0` and
    /// [`PolicyError::UnknownField`] when the policy does not check `field`.
    pub fn with_min_chars(mut self, field: Field, min: usize) -> Result<Self, PolicyError> {
        if min == 0 {
            return Err(PolicyError::ZeroMinimum { field });
        }
        let entry = self.entry_mut(field)?;
        match entry
            .rules
            .iter_mut()
            .find(|rule| matches!(rule, Rule::MinChars(_)))
        {
            Some(rule) => *rule = Rule::MinChars(min),
            None => entry.rules.push(Rule::MinChars(min)),
        }
        Ok(self)
    }

    /// Require at least one ASCII letter in `field`.
    ///
    /// Does nothing when the rule is already present.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnknownField`] when the policy does not check
    /// `field`.
    pub fn with_letter_required(mut self, field: Field) -> Result<Self, PolicyError> {
        let entry = self.entry_mut(field)?;
        if !entry.rules.contains(&Rule::ContainsAsciiLetter) {
            entry.rules.push(Rule::ContainsAsciiLetter);
        }
        Ok(self)
    }

    fn entry_mut(&mut self, field: Field) -> Result<&mut FieldPolicy, PolicyError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.field == field)
            .ok_or(PolicyError::UnknownField { field })
    }
}

fn email_entry() -> FieldPolicy {
    FieldPolicy::entry(
        Field::Email,
        vec![Rule::Required, Rule::EmailShape],
        "Invalid email",
    )
}

/// Builder for custom [`ValidationPolicy`] tables.
///
/// # Examples
/// ```
/// use form_validation::{Field, FormInput, Rule, ValidationPolicy};
///
/// let policy = ValidationPolicy::builder()
///     .field(Field::Email, [Rule::Required, Rule::EmailShape], "Enter a valid email address")
///     .build()
///     .expect("valid table");
///
/// let result = policy.validate(&FormInput::sign_in("nope", ""));
/// assert_eq!(result.get(Field::Email), Some("Enter a valid email address"));
/// assert_eq!(result.get(Field::Password), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    entries: Vec<FieldPolicy>,
}

impl PolicyBuilder {
    /// Append rules for `field`.
    #[must_use]
    pub fn field(
        mut self,
        field: Field,
        rules: impl IntoIterator<Item = Rule>,
        message: impl Into<String>,
    ) -> Self {
        self.entries.push(FieldPolicy {
            field,
            rules: rules.into_iter().collect(),
            message: message.into(),
        });
        self
    }

    /// Check the table invariants and produce the policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] for a repeated field, a field without rules,
    /// a blank message, or a `MinChars(0)` rule.
    pub fn build(self) -> Result<ValidationPolicy, PolicyError> {
        for (index, entry) in self.entries.iter().enumerate() {
            let field = entry.field;
            if self
                .entries
                .iter()
                .take(index)
                .any(|earlier| earlier.field == field)
            {
                return Err(PolicyError::DuplicateField { field });
            }
            if entry.rules.is_empty() {
                return Err(PolicyError::NoRules { field });
            }
            if entry.message.trim().is_empty() {
                return Err(PolicyError::EmptyMessage { field });
            }
            if entry.rules.contains(&Rule::MinChars(0)) {
                return Err(PolicyError::ZeroMinimum { field });
            }
        }
        Ok(ValidationPolicy {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Policy table behaviour: named variants, overrides, and builder checks.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PolicyKind::Registration, vec![Field::Name, Field::Email, Field::Password])]
    #[case(PolicyKind::SignIn, vec![Field::Email, Field::Password])]
    fn named_policies_check_expected_fields(#[case] kind: PolicyKind, #[case] expected: Vec<Field>) {
        let fields: Vec<Field> = kind.policy().fields().collect();
        assert_eq!(fields, expected);
    }

    #[rstest]
    #[case(Field::Name, "Name must be at least 2 characters")]
    #[case(Field::Email, "Invalid email")]
    #[case(Field::Password, "Password must be at least 8 characters")]
    fn registration_messages(#[case] field: Field, #[case] expected: &str) {
        let policy = ValidationPolicy::registration();
        let entry = policy.entry(field).expect("registration checks field");
        assert_eq!(entry.message(), expected);
    }

    #[test]
    fn sign_in_password_message_keeps_short_form() {
        let policy = ValidationPolicy::sign_in();
        let entry = policy.entry(Field::Password).expect("sign-in checks password");
        assert_eq!(entry.message(), "Password must be at least 8 chars");
    }

    #[test]
    fn sign_in_ignores_name_even_when_present() {
        let mut input = FormInput::sign_in("x@y.com", "abc12345");
        input.set(Field::Name, "");
        assert!(ValidationPolicy::sign_in().validate(&input).is_empty());
    }

    #[test]
    fn astral_characters_count_twice_towards_minimums() {
        let result = ValidationPolicy::registration()
            .validate(&FormInput::registration("😀", "a@b.co", "😀😀😀😀"));
        assert!(result.is_empty(), "unexpected errors: {result:?}");
    }

    #[test]
    fn min_override_rerenders_message() {
        let policy = ValidationPolicy::registration()
            .with_min_chars(Field::Name, 3)
            .expect("name is checked");
        let result = policy.validate(&FormInput::registration("Al", "a@b.co", "abcdefgh"));
        assert_eq!(
            result.get(Field::Name),
            Some("Name must be at least 3 characters")
        );
    }

    #[test]
    fn min_override_adds_missing_rule() {
        let policy = ValidationPolicy::registration()
            .with_min_chars(Field::Email, 10)
            .expect("email is checked");
        let entry = policy.entry(Field::Email).expect("email entry");
        assert_eq!(entry.min_chars(), Some(10));
        let result = policy.validate(&FormInput::registration("Al", "a@b.co", "abcdefgh"));
        assert!(result.contains(Field::Email));
    }

    #[rstest]
    #[case(Field::Password, 0, PolicyError::ZeroMinimum { field: Field::Password })]
    #[case(Field::Name, 4, PolicyError::UnknownField { field: Field::Name })]
    fn rejected_min_overrides(#[case] field: Field, #[case] min: usize, #[case] expected: PolicyError) {
        let err = ValidationPolicy::sign_in()
            .with_min_chars(field, min)
            .expect_err("override must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn letter_requirement_is_idempotent() {
        let policy = ValidationPolicy::sign_in()
            .with_letter_required(Field::Password)
            .expect("password is checked");
        assert_eq!(policy, ValidationPolicy::sign_in());
    }

    #[test]
    fn letter_requirement_tightens_registration() {
        let policy = ValidationPolicy::registration()
            .with_letter_required(Field::Password)
            .expect("password is checked");
        let result = policy.validate(&FormInput::registration("Al", "a@b.co", "12345678"));
        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::Password]);
    }

    #[rstest]
    #[case(
        ValidationPolicy::builder()
            .field(Field::Email, [Rule::Required], "a")
            .field(Field::Email, [Rule::EmailShape], "b"),
        PolicyError::DuplicateField { field: Field::Email }
    )]
    #[case(
        ValidationPolicy::builder().field(Field::Name, Vec::<Rule>::new(), "Name required"),
        PolicyError::NoRules { field: Field::Name }
    )]
    #[case(
        ValidationPolicy::builder().field(Field::Name, [Rule::Required], "  "),
        PolicyError::EmptyMessage { field: Field::Name }
    )]
    #[case(
        ValidationPolicy::builder().field(Field::Password, [Rule::MinChars(0)], "too short"),
        PolicyError::ZeroMinimum { field: Field::Password }
    )]
    fn builder_rejects_broken_tables(#[case] builder: PolicyBuilder, #[case] expected: PolicyError) {
        assert_eq!(builder.build().expect_err("table must be rejected"), expected);
    }

    #[test]
    fn builder_matches_named_policy() {
        let built = ValidationPolicy::builder()
            .field(
                Field::Email,
                [Rule::Required, Rule::EmailShape],
                "Invalid email",
            )
            .field(
                Field::Password,
                [Rule::Required, Rule::MinChars(8), Rule::ContainsAsciiLetter],
                "Password must be at least {min} chars",
            )
            .build()
            .expect("valid table");
        assert_eq!(built, ValidationPolicy::sign_in());
    }

    #[rstest]
    #[case("registration", PolicyKind::Registration)]
    #[case("Register", PolicyKind::Registration)]
    #[case("sign-in", PolicyKind::SignIn)]
    #[case("signin", PolicyKind::SignIn)]
    fn parses_policy_kinds(#[case] raw: &str, #[case] expected: PolicyKind) {
        assert_eq!(raw.parse::<PolicyKind>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_policy_kind() {
        assert!("login".parse::<PolicyKind>().is_err());
    }
}
