//! Core value types for phone number input.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits after the '+'")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// Country calling prefix (e.g., "+1" for the United States, "+358" for Finland).
///
/// Dial codes are always stored with a leading '+', which is how they appear
/// both in the country selector and at the start of a normalized value.
///
/// # Example
///
/// ```rust
/// use phone_pattern::DialCode;
///
/// let dc = DialCode::new("44").unwrap();
/// assert_eq!(dc.to_string(), "+44");
///
/// let dc = DialCode::new(" +1 ").unwrap();
/// assert_eq!(dc.as_str(), "+1");
/// assert_eq!(dc.digits(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input may or may not include the leading '+'.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(format!("+{n}")))
    }

    /// Get the dial code as a string slice, including the '+'.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part of the dial code, without the '+'.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DialCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// Digits
// =============================================================================

/// A run of ASCII decimal digits with every separator removed.
///
/// The only way to build one is [`Digits::extract`], so the contents are
/// digits by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Digits(String);

impl Digits {
    /// Keep only the ASCII digits of `raw`, in order.
    pub fn extract(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Digits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// NormalizedValue
// =============================================================================

/// Persisted phone value: dial code followed by bare digits (e.g., "+15551234567").
///
/// Values handed over by a host are accepted as-is through `From`, since they
/// may have been written by something else. Values produced by this crate go
/// through [`NormalizedValue::compose`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedValue(String);

impl NormalizedValue {
    /// Join a dial code and digits.
    ///
    /// An empty digit run yields an empty value rather than a bare dial code.
    ///
    /// ```rust
    /// use phone_pattern::{DialCode, Digits, NormalizedValue};
    ///
    /// let dc = DialCode::new("+1").unwrap();
    /// let value = NormalizedValue::compose(&dc, &Digits::extract("555-1234"));
    /// assert_eq!(value.as_str(), "+15551234");
    ///
    /// assert!(NormalizedValue::compose(&dc, &Digits::extract("")).is_empty());
    /// ```
    pub fn compose(dial_code: &DialCode, digits: &Digits) -> Self {
        if digits.is_empty() {
            return Self::default();
        }
        Self(format!("{}{}", dial_code.as_str(), digits.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for NormalizedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NormalizedValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for NormalizedValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NormalizedValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // DialCode tests
    #[test]
    fn test_dial_code_valid() {
        assert!(DialCode::new("1").is_ok());
        assert!(DialCode::new("+358").is_ok());
        assert!(DialCode::new("44").is_ok());
    }

    #[test]
    fn test_dial_code_adds_plus() {
        let dc = DialCode::new("971").unwrap();
        assert_eq!(dc.as_str(), "+971");
        assert_eq!(dc.digits(), "971");
    }

    #[test]
    fn test_dial_code_trim() {
        let dc = DialCode::new("  +7  ").unwrap();
        assert_eq!(dc.as_str(), "+7");
    }

    #[test]
    fn test_dial_code_empty() {
        assert_eq!(DialCode::new(""), Err(DialCodeError::Empty));
        assert_eq!(DialCode::new("+"), Err(DialCodeError::Empty));
    }

    #[test]
    fn test_dial_code_non_digit() {
        assert_eq!(DialCode::new("+1-684"), Err(DialCodeError::NonDigit));
    }

    #[test]
    fn test_dial_code_serde() {
        let dc = DialCode::new("380").unwrap();
        let json = serde_json::to_string(&dc).unwrap();
        assert_eq!(json, r#""+380""#);

        let dc: DialCode = serde_json::from_str(r#""44""#).unwrap();
        assert_eq!(dc.as_str(), "+44");

        assert!(serde_json::from_str::<DialCode>(r#""abc""#).is_err());
    }

    // Digits tests
    #[test]
    fn test_digits_extract() {
        assert_eq!(Digits::extract("(555) 123-4567").as_str(), "5551234567");
        assert_eq!(Digits::extract("+44 20").as_str(), "4420");
        assert!(Digits::extract("abc").is_empty());
    }

    #[test]
    fn test_digits_ignore_non_ascii_numerals() {
        // Arabic-Indic digits are not ASCII and are dropped.
        assert_eq!(Digits::extract("٥5").as_str(), "5");
    }

    // NormalizedValue tests
    #[test]
    fn test_normalized_compose() {
        let dc = DialCode::new("44").unwrap();
        let value = NormalizedValue::compose(&dc, &Digits::extract("7911 123456"));
        assert_eq!(value.as_str(), "+447911123456");
    }

    #[test]
    fn test_normalized_serde_transparent() {
        let value = NormalizedValue::from("+15551234567");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""+15551234567""#);
    }
}
