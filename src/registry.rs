//! Country registry and allow-list filtering.

use crate::types::DialCode;
use keshvar::Country;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// One selectable country: ISO code, calling prefix, name and flag glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// ISO 3166-1 alpha-2 code (e.g., "US").
    #[serde(rename = "code")]
    pub iso_code: String,
    /// Calling prefix (e.g., "+1").
    pub dial_code: DialCode,
    /// Name shown in the country selector.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Flag emoji.
    pub flag: String,
}

impl CountryEntry {
    /// Resolve the ISO 3166 country this entry stands for.
    pub fn country(&self) -> Option<Country> {
        Country::try_from(self.iso_code.as_str()).ok()
    }
}

/// Registry JSON embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../assets/countries.json");

/// The full ordered registry.
///
/// Order matters: value decomposition tests dial codes in this order, so
/// "US" comes before "CA" and a "+1" value always resolves to "US".
static REGISTRY: Lazy<Vec<CountryEntry>> = Lazy::new(|| {
    serde_json::from_str(COUNTRIES_JSON).expect("countries.json is invalid")
});

/// The full registry, in its fixed order.
pub fn registry() -> &'static [CountryEntry] {
    &REGISTRY
}

/// Find an entry by ISO code, ignoring ASCII case.
pub fn find_by_iso<'a>(entries: &'a [CountryEntry], iso_code: &str) -> Option<&'a CountryEntry> {
    let iso_code = iso_code.trim();
    entries
        .iter()
        .find(|entry| entry.iso_code.eq_ignore_ascii_case(iso_code))
}

/// Split a comma-separated allow-list into trimmed, upper-cased ISO codes.
///
/// Empty items are dropped, so `""` and `" , "` both mean "no restriction".
pub fn parse_allow_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Restrict `all` to the entries named in `allow_list`, keeping registry order.
///
/// An empty allow-list means every entry. The result is never empty: when
/// none of the requested codes is known, the full list is returned instead.
///
/// ```rust
/// use phone_pattern::{filter_allowed, registry};
///
/// let allowed = filter_allowed(registry(), &["CA", "US"]);
/// let codes: Vec<_> = allowed.iter().map(|e| e.iso_code.as_str()).collect();
/// assert_eq!(codes, ["US", "CA"]);
/// ```
pub fn filter_allowed<S: AsRef<str>>(all: &[CountryEntry], allow_list: &[S]) -> Vec<CountryEntry> {
    if allow_list.is_empty() {
        return all.to_vec();
    }

    #[cfg(feature = "tracing")]
    for code in allow_list {
        let code = code.as_ref();
        if find_by_iso(all, code).is_some() {
            continue;
        }
        if Country::try_from(code.trim().to_ascii_uppercase().as_str()).is_err() {
            warn!(iso = %code, "Allowed country code is not an ISO 3166 alpha-2 code");
        } else {
            debug!(iso = %code, "Allowed country code has no registry entry");
        }
    }

    let filtered: Vec<CountryEntry> = all
        .iter()
        .filter(|entry| {
            allow_list
                .iter()
                .any(|code| entry.iso_code.eq_ignore_ascii_case(code.as_ref().trim()))
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        #[cfg(feature = "tracing")]
        debug!("No allowed country codes matched, falling back to full registry");
        return all.to_vec();
    }

    filtered
}

/// Pick the entry for `iso_code`, or the first entry when it is unknown.
///
/// `entries` must be non-empty, which holds for any output of
/// [`filter_allowed`] over the embedded registry.
///
/// # Panics
///
/// Panics if `entries` is empty.
pub fn select_default<'a>(entries: &'a [CountryEntry], iso_code: &str) -> &'a CountryEntry {
    find_by_iso(entries, iso_code).unwrap_or(&entries[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use keshvar::Alpha2;
    use std::collections::HashSet;

    fn iso_codes(entries: &[CountryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.iso_code.as_str()).collect()
    }

    #[test]
    fn test_registry_loads() {
        assert_eq!(registry().len(), 30);
        assert_eq!(registry()[0].iso_code, "US");
        assert_eq!(registry()[0].dial_code.as_str(), "+1");
        assert_eq!(registry()[0].display_name, "United States");
    }

    #[test]
    fn test_registry_iso_codes_unique() {
        let unique: HashSet<_> = registry().iter().map(|e| &e.iso_code).collect();
        assert_eq!(unique.len(), registry().len());
    }

    #[test]
    fn test_registry_entries_are_iso_countries() {
        for entry in registry() {
            assert!(
                entry.country().is_some(),
                "{} should be an ISO 3166 country",
                entry.iso_code
            );
        }
        let gb = find_by_iso(registry(), "GB").unwrap();
        assert_eq!(gb.country().unwrap().alpha2(), Alpha2::GB);
    }

    #[test]
    fn test_us_precedes_ca() {
        let us = registry().iter().position(|e| e.iso_code == "US").unwrap();
        let ca = registry().iter().position(|e| e.iso_code == "CA").unwrap();
        assert!(us < ca);
    }

    #[test]
    fn test_find_by_iso_case_insensitive() {
        assert_eq!(find_by_iso(registry(), "de").unwrap().display_name, "Germany");
        assert_eq!(find_by_iso(registry(), " FI ").unwrap().dial_code.as_str(), "+358");
        assert!(find_by_iso(registry(), "ZZ").is_none());
    }

    #[test]
    fn test_parse_allow_list() {
        assert_eq!(parse_allow_list(" ca, us ,,"), vec!["CA", "US"]);
        assert!(parse_allow_list("").is_empty());
        assert!(parse_allow_list(" , ").is_empty());
    }

    #[test]
    fn test_filter_empty_allow_list_is_full_registry() {
        let none: [&str; 0] = [];
        assert_eq!(filter_allowed(registry(), &none), registry().to_vec());
    }

    #[test]
    fn test_filter_preserves_registry_order() {
        let allowed = filter_allowed(registry(), &["CA", "US"]);
        assert_eq!(iso_codes(&allowed), ["US", "CA"]);
    }

    #[test]
    fn test_filter_skips_unknown_codes() {
        let allowed = filter_allowed(registry(), &["ZZ", "jp"]);
        assert_eq!(iso_codes(&allowed), ["JP"]);
    }

    #[test]
    fn test_filter_unknown_only_falls_back() {
        let allowed = filter_allowed(registry(), &["ZZ"]);
        assert_eq!(allowed.len(), registry().len());
    }

    #[test]
    fn test_select_default() {
        let allowed = filter_allowed(registry(), &["GB", "IE"]);
        assert_eq!(select_default(&allowed, "IE").iso_code, "IE");
        assert_eq!(select_default(&allowed, "US").iso_code, "GB");
    }

    #[test]
    #[should_panic]
    fn test_select_default_empty_slice_panics() {
        select_default(&[], "US");
    }
}
