//! ContactName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]{2,}$").expect("Failed to compile name regex"));

/// Check whether `name` consists of at least two ASCII letters or spaces.
pub fn validate_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Titlecase form of characters whose titlecase differs from their uppercase.
fn to_titlecase(c: char) -> Option<&'static str> {
    let title = match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        _ => return None,
    };
    Some(title)
}

/// Title-case `text`.
///
/// An alphabetic character is titlecased when it starts a word (i.e. the
/// previous character is not alphabetic) and lowercased otherwise, so
/// `"jOHN o'neil"` becomes `"John O'Neil"` and `"ßport"` becomes `"Ssport"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_alphabetic = false;

    for c in text.chars() {
        if previous_alphabetic {
            result.extend(c.to_lowercase());
        } else if let Some(title) = to_titlecase(c) {
            result.push_str(title);
        } else {
            result.extend(c.to_uppercase());
        }
        previous_alphabetic = c.is_alphabetic();
    }

    result
}

/// Trim and title-case a raw name. The result is what the store uses as key.
pub fn normalize_name(raw: &str) -> String {
    title_case(raw.trim())
}

/// A normalized, validated contact name.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::parse("  ada lovelace ").unwrap();
/// assert_eq!(name.as_str(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Normalize `raw` and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` carrying the normalized text
    /// if it is not at least two letters or spaces.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = normalize_name(raw);

        if !validate_name(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
