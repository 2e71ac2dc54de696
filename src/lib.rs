//! # Phone Pattern
//!
//! Phone number input with country dial code selection and pattern-based
//! live formatting.
//!
//! The crate is split into stateless string functions and a rendering-free
//! control that drives them:
//!
//! | Piece | Module | What it does |
//! |-------|--------|--------------|
//! | Formatter | [`format`](mod@format) | digits + pattern → display text |
//! | Parser | [`parse`](mod@parse) | stored value → country + digits |
//! | Registry | [`registry`](mod@registry) | country list, allow-list filtering |
//! | Control | [`control`] | selection, input and lifecycle state |
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_pattern::{ControlConfig, FormatPattern, PhoneInputControl, format};
//!
//! // Stateless formatting
//! assert_eq!(format("5551234567", &FormatPattern::default()), "(555) 123-4567");
//!
//! // Stateful control, as a host would drive it
//! let config = ControlConfig::builder()
//!     .allowed_country_codes("US,CA,GB")
//!     .build();
//! let mut control = PhoneInputControl::init(&config);
//!
//! let outcome = control.handle_input("555 123 4567");
//! assert_eq!(outcome.display, "(555) 123-4567");
//! assert_eq!(control.outputs().phone_number.as_str(), "+15551234567");
//! ```
//!
//! ## Value flow
//!
//! ```text
//! "+15551234567"  ──decompose──▶  (US, "5551234567")  ──format──▶  "(555) 123-4567"
//!       ▲                                                               │
//!       └──────────── compose ◀──── strip non-digits ◀──────────────────┘
//! ```
//!
//! ## Features
//!
//! - `tracing` - debug and warning events via `tracing` (enabled by default)

pub mod config;
pub mod control;
pub mod errors;
pub mod format;
pub mod parse;
pub mod registry;
pub mod subscription;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{ControlConfig, ControlConfigBuilder};
pub use control::{ClickEvent, ControlOutputs, CountryOption, InputOutcome, PhoneInputControl};
pub use errors::ConfigError;
pub use format::{FormatPattern, format, format_input};
pub use parse::{Decomposition, decompose};
pub use registry::{CountryEntry, filter_allowed, find_by_iso, parse_allow_list, registry, select_default};
pub use subscription::{ListenerSet, Subscription};
pub use types::{DialCode, DialCodeError, Digits, NormalizedValue};

// Re-export keshvar types for convenience
pub use keshvar::{Alpha2, Country};
