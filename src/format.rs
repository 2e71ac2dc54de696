//! Pattern-based digit formatting.

use crate::types::Digits;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Pattern used when the host supplies none.
pub const DEFAULT_PATTERN: &str = "(###) ###-####";

/// Character that marks "next digit goes here" unless overridden.
pub const DEFAULT_PLACEHOLDER: char = '#';

/// A display template such as `"(###) ###-####"`.
///
/// Every occurrence of the placeholder consumes one input digit. Every other
/// character is copied verbatim and never consumes input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPattern {
    template: String,
    placeholder: char,
}

impl Default for FormatPattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl FormatPattern {
    /// Create a pattern using `#` as the placeholder.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Use a different placeholder character.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Number of digits the pattern can place before overflow starts.
    pub fn capacity(&self) -> usize {
        self.template
            .chars()
            .filter(|&c| c == self.placeholder)
            .count()
    }
}

impl Display for FormatPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

/// Render `digits` through `pattern`.
///
/// Literals are emitted only while digits remain, so a partial number never
/// ends in a dangling separator. Digits left over once the pattern runs out
/// are appended unformatted.
///
/// ```rust
/// use phone_pattern::{format, FormatPattern};
///
/// let pattern = FormatPattern::default();
/// assert_eq!(format("555", &pattern), "(555");
/// assert_eq!(format("5551234567", &pattern), "(555) 123-4567");
/// assert_eq!(format("55512345678", &pattern), "(555) 123-45678");
/// ```
pub fn format(digits: &str, pattern: &FormatPattern) -> String {
    let mut remaining = digits.chars().peekable();
    if remaining.peek().is_none() {
        return String::new();
    }

    let mut formatted = String::with_capacity(pattern.template.len() + digits.len());
    for c in pattern.template.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if c == pattern.placeholder {
            if let Some(digit) = remaining.next() {
                formatted.push(digit);
            }
        } else {
            formatted.push(c);
        }
    }

    formatted.extend(remaining);
    formatted
}

/// Strip raw input down to its digits and format the result.
///
/// Returns the extracted digits alongside the display string so callers can
/// build the normalized value from the same data.
pub fn format_input(raw: &str, pattern: &FormatPattern) -> (Digits, String) {
    let digits = Digits::extract(raw);
    let display = format(digits.as_str(), pattern);
    (digits, display)
}
