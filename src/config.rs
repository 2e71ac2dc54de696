//! Host-supplied control configuration.

use crate::errors::ConfigError;
use crate::format::{DEFAULT_PATTERN, FormatPattern};
use crate::registry::parse_allow_list;
use crate::types::NormalizedValue;
use serde::{Deserialize, Deserializer};

/// Country selected when the host names none.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Input placeholder shown when the host names none.
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Enter phone number";

/// Configuration values the host passes on init and on every update.
///
/// Empty strings are treated as missing and replaced by the defaults, so an
/// empty `format_pattern` means the default pattern, not "no formatting".
///
/// Hosts that store their property bag as JSON can use
/// [`ControlConfig::from_json`]; field names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlConfig {
    /// Display pattern, `#` standing for one digit.
    #[serde(deserialize_with = "or_default_pattern")]
    pub format_pattern: String,
    /// ISO code of the country selected initially.
    #[serde(deserialize_with = "or_default_country")]
    pub default_country_code: String,
    /// Comma-separated ISO codes; empty allows every country.
    #[serde(deserialize_with = "or_empty")]
    pub allowed_country_codes: String,
    /// Placeholder text for the number input.
    #[serde(deserialize_with = "or_default_placeholder")]
    pub placeholder_text: String,
    /// Whether country rows and the selector show flag glyphs.
    #[serde(deserialize_with = "or_true")]
    pub show_country_flags: bool,
    /// Stored value (dial code followed by digits).
    #[serde(deserialize_with = "or_empty_value")]
    pub phone_number: NormalizedValue,
    /// Read-only mode.
    pub disabled: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            format_pattern: DEFAULT_PATTERN.to_string(),
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            allowed_country_codes: String::new(),
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
            show_country_flags: true,
            phone_number: NormalizedValue::default(),
            disabled: false,
        }
    }
}

impl ControlConfig {
    /// Create a new builder for ControlConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phone_pattern::ControlConfig;
    ///
    /// let config = ControlConfig::builder()
    ///     .format_pattern("#### ### ###")
    ///     .default_country_code("AU")
    ///     .allowed_country_codes("AU,NZ")
    ///     .build();
    ///
    /// assert_eq!(config.default_country_code, "AU");
    /// assert_eq!(config.allow_list(), ["AU", "NZ"]);
    /// ```
    pub fn builder() -> ControlConfigBuilder {
        ControlConfigBuilder::default()
    }

    /// Parse a JSON property bag. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Return the config with a different stored value.
    pub fn with_phone_number(mut self, value: impl Into<NormalizedValue>) -> Self {
        self.phone_number = value.into();
        self
    }

    /// Return the config with a different read-only flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The display pattern, falling back to the default if empty.
    pub fn pattern(&self) -> FormatPattern {
        if self.format_pattern.is_empty() {
            FormatPattern::default()
        } else {
            FormatPattern::new(self.format_pattern.as_str())
        }
    }

    /// Allowed ISO codes, trimmed and upper-cased.
    pub fn allow_list(&self) -> Vec<String> {
        parse_allow_list(&self.allowed_country_codes)
    }

    /// Default country ISO code, falling back to "US" if empty.
    pub fn default_country(&self) -> &str {
        let code = self.default_country_code.trim();
        if code.is_empty() {
            DEFAULT_COUNTRY_CODE
        } else {
            code
        }
    }

    /// Placeholder text, falling back to the default if empty.
    pub fn placeholder(&self) -> &str {
        if self.placeholder_text.is_empty() {
            DEFAULT_PLACEHOLDER_TEXT
        } else {
            &self.placeholder_text
        }
    }
}

/// Builder for ControlConfig.
#[derive(Debug, Clone, Default)]
pub struct ControlConfigBuilder {
    config: ControlConfig,
}

impl ControlConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display pattern.
    ///
    /// Default: `"(###) ###-####"`
    pub fn format_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.format_pattern = pattern.into();
        self
    }

    /// Set the initially selected country.
    ///
    /// Default: `"US"`
    pub fn default_country_code(mut self, code: impl Into<String>) -> Self {
        self.config.default_country_code = code.into();
        self
    }

    /// Set the comma-separated allow-list.
    ///
    /// Default: empty (all countries)
    pub fn allowed_country_codes(mut self, codes: impl Into<String>) -> Self {
        self.config.allowed_country_codes = codes.into();
        self
    }

    /// Set the input placeholder.
    ///
    /// Default: `"Enter phone number"`
    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder_text = text.into();
        self
    }

    /// Show or hide flags.
    ///
    /// Default: `true`
    pub fn show_country_flags(mut self, show: bool) -> Self {
        self.config.show_country_flags = show;
        self
    }

    /// Set the stored value.
    pub fn phone_number(mut self, value: impl Into<NormalizedValue>) -> Self {
        self.config.phone_number = value.into();
        self
    }

    /// Set read-only mode.
    ///
    /// Default: `false`
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Build the ControlConfig.
    pub fn build(self) -> ControlConfig {
        self.config
    }
}

// Hosts send `null` for unset properties; map those to the defaults.

fn or_default_pattern<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    or_string(d, DEFAULT_PATTERN)
}

fn or_default_country<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    or_string(d, DEFAULT_COUNTRY_CODE)
}

fn or_default_placeholder<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    or_string(d, DEFAULT_PLACEHOLDER_TEXT)
}

fn or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    or_string(d, "")
}

fn or_empty_value<'de, D: Deserializer<'de>>(d: D) -> Result<NormalizedValue, D::Error> {
    Ok(Option::<String>::deserialize(d)?
        .map(NormalizedValue::from)
        .unwrap_or_default())
}

fn or_true<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(d)?.unwrap_or(true))
}

fn or_string<'de, D: Deserializer<'de>>(d: D, default: &str) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string()))
}
