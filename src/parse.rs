//! Decomposing a stored value back into a country and its digits.

use crate::registry::CountryEntry;
use crate::types::Digits;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Outcome of [`decompose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'a> {
    /// Entry in effect after decomposition.
    pub entry: &'a CountryEntry,
    /// National digits with the dial code and separators removed.
    pub digits: Digits,
    /// Whether `entry` came from a dial code match rather than the prior selection.
    pub matched: bool,
}

/// Split a normalized value into the entry whose dial code prefixes it and
/// the remaining digits.
///
/// Entries are tested in slice order and the first prefix match wins, so with
/// overlapping codes (such as two countries on "+1") the earlier entry is
/// always chosen. With no match, `current` is kept and digits are taken from
/// the whole value.
///
/// ```rust
/// use phone_pattern::{decompose, find_by_iso, registry};
///
/// let us = find_by_iso(registry(), "US").unwrap();
/// let parts = decompose("+447911123456", registry(), us);
/// assert_eq!(parts.entry.iso_code, "GB");
/// assert_eq!(parts.digits.as_str(), "7911123456");
/// ```
pub fn decompose<'a>(
    value: &str,
    entries: &'a [CountryEntry],
    current: &'a CountryEntry,
) -> Decomposition<'a> {
    if value.is_empty() {
        return Decomposition {
            entry: current,
            digits: Digits::default(),
            matched: false,
        };
    }

    for entry in entries {
        if let Some(rest) = value.strip_prefix(entry.dial_code.as_str()) {
            return Decomposition {
                entry,
                digits: Digits::extract(rest),
                matched: true,
            };
        }
    }

    #[cfg(feature = "tracing")]
    debug!(
        value = %value,
        current = %current.iso_code,
        "No dial code matched stored value, keeping current country"
    );

    Decomposition {
        entry: current,
        digits: Digits::extract(value),
        matched: false,
    }
}
