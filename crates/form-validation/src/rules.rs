//! Single-value rule predicates.

use std::sync::OnceLock;

use regex::Regex;

/// A predicate applied to one field value.
///
/// Rules never fail with an error; they only accept or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty. Whitespace counts as content.
    Required,
    /// The value must be at least this long, measured in UTF-16 code
    /// units. A character outside the Basic Multilingual Plane counts as
    /// two.
    MinChars(usize),
    /// The value must look like `local@domain.tld`.
    EmailShape,
    /// The value must contain at least one ASCII letter.
    ContainsAsciiLetter,
}

impl Rule {
    /// Return `true` when `value` satisfies the rule.
    ///
    /// # Examples
    /// ```
    /// use form_validation::Rule;
    ///
    /// assert!(Rule::MinChars(2).accepts("Al"));
    /// assert!(!Rule::Required.accepts(""));
    /// assert!(!Rule::ContainsAsciiLetter.accepts("12345678"));
    /// ```
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MinChars(min) => value.encode_utf16().count() >= min,
            Self::EmailShape => is_email_shaped(value),
            Self::ContainsAsciiLetter => value.chars().any(|c| c.is_ascii_alphabetic()),
        }
    }
}

/// Characters excluded from every part of an address: the ECMAScript
/// `\s` set (which includes U+FEFF but not U+0085) plus `@`.
const PART: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Loose: one "@", and a dot somewhere after it.
        let pattern = format!(r"^{PART}@{PART}\.{PART}$");
        Regex::new(&pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Return `true` when `value` has the `local@domain.tld` shape.
///
/// Each of the three parts is one or more characters that are neither
/// whitespace nor `@`, with whitespace as ECMAScript defines it. This
/// accepts many addresses RFC 5322 rejects.
///
/// # Examples
/// ```
/// use form_validation::is_email_shaped;
///
/// assert!(is_email_shaped("a@b.co"));
/// assert!(!is_email_shaped("a@localhost"));
/// ```
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    email_regex().is_match(value)
}
