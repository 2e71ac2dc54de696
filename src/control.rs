//! Rendering-free phone input control.
//!
//! [`PhoneInputControl`] keeps the state of a country-selector-plus-number
//! input and applies formatting and decomposition as the host feeds it
//! configuration and input events. A front-end only needs to bind
//! [`display`](PhoneInputControl::display), [`country_options`](PhoneInputControl::country_options)
//! and friends to its widgets.

use crate::config::ControlConfig;
use crate::format::{FormatPattern, format, format_input};
use crate::parse::decompose;
use crate::registry::{CountryEntry, filter_allowed, find_by_iso, registry, select_default};
use crate::subscription::{ListenerSet, Subscription};
use crate::types::{DialCode, Digits, NormalizedValue};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Values reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlOutputs {
    pub phone_number: NormalizedValue,
}

/// Result of feeding one input event to the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// Text to put back into the input field.
    pub display: String,
    /// Value after the event.
    pub value: NormalizedValue,
    /// Whether `value` differs from the value before the event.
    pub changed: bool,
}

/// One row of the country dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub iso_code: String,
    /// Present only when flags are enabled.
    pub flag: Option<String>,
    pub dial_code: DialCode,
    pub name: String,
    pub selected: bool,
}

/// A click somewhere on the page, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Whether the click landed inside the country selector.
    pub inside_selector: bool,
}

/// State of one phone input.
#[derive(Debug)]
pub struct PhoneInputControl {
    allowed: Vec<CountryEntry>,
    selected: CountryEntry,
    pattern: FormatPattern,
    value: NormalizedValue,
    /// Digits rendered in `display`.
    digits: Digits,
    display: String,
    placeholder: String,
    show_flags: bool,
    disabled: bool,
    focused: bool,
    dropdown_open: Rc<Cell<bool>>,
    outside_click: Option<Subscription>,
}

impl PhoneInputControl {
    /// Build the control from the host's initial configuration.
    ///
    /// The stored value, if any, is decomposed against the allowed countries
    /// and may override the configured default country.
    pub fn init(config: &ControlConfig) -> Self {
        let allowed = filter_allowed(registry(), &config.allow_list());
        let selected = select_default(&allowed, config.default_country()).clone();

        let mut control = Self {
            allowed,
            selected,
            pattern: config.pattern(),
            value: config.phone_number.clone(),
            digits: Digits::default(),
            display: String::new(),
            placeholder: config.placeholder().to_string(),
            show_flags: config.show_country_flags,
            disabled: config.disabled,
            focused: false,
            dropdown_open: Rc::new(Cell::new(false)),
            outside_click: None,
        };
        control.render_value();

        #[cfg(feature = "tracing")]
        debug!(
            country = %control.selected.iso_code,
            allowed = control.allowed.len(),
            pattern = %control.pattern,
            "Phone input initialized"
        );

        control
    }

    /// Apply an updated configuration from the host.
    ///
    /// Returns `true` when the host supplied a value different from the
    /// current one and the control adopted it.
    pub fn update_view(&mut self, config: &ControlConfig) -> bool {
        if config.disabled != self.disabled {
            self.set_disabled(config.disabled);
        }

        self.placeholder = config.placeholder().to_string();
        self.show_flags = config.show_country_flags;

        let allowed = filter_allowed(registry(), &config.allow_list());
        if allowed != self.allowed {
            if find_by_iso(&allowed, &self.selected.iso_code).is_none() {
                self.selected = select_default(&allowed, config.default_country()).clone();
            }
            self.allowed = allowed;
        }

        let pattern = config.pattern();
        if pattern != self.pattern {
            self.pattern = pattern;
            self.display = format(self.digits.as_str(), &self.pattern);
        }

        if config.phone_number == self.value {
            return false;
        }

        #[cfg(feature = "tracing")]
        debug!(value = %config.phone_number, "Adopting externally changed value");

        self.value = config.phone_number.clone();
        self.render_value();
        true
    }

    /// Handle raw text typed into the number field.
    ///
    /// Ignored while disabled: the returned outcome reflects the unchanged state.
    pub fn handle_input(&mut self, raw: &str) -> InputOutcome {
        if self.disabled {
            return InputOutcome {
                display: self.display.clone(),
                value: self.value.clone(),
                changed: false,
            };
        }

        let (digits, display) = format_input(raw, &self.pattern);
        let value = NormalizedValue::compose(&self.selected.dial_code, &digits);
        let changed = value != self.value;

        self.display = display;
        self.digits = digits;
        self.value = value;

        InputOutcome {
            display: self.display.clone(),
            value: self.value.clone(),
            changed,
        }
    }

    /// Select a country from the dropdown and close it.
    ///
    /// The stored value keeps its old dial code until the next input event.
    /// Returns `false` when disabled or when `iso_code` is not allowed.
    pub fn select_country(&mut self, iso_code: &str) -> bool {
        if self.disabled {
            return false;
        }
        let Some(entry) = find_by_iso(&self.allowed, iso_code) else {
            #[cfg(feature = "tracing")]
            debug!(iso = %iso_code, "Ignoring selection of a country that is not allowed");
            return false;
        };

        self.selected = entry.clone();
        self.dropdown_open.set(false);

        #[cfg(feature = "tracing")]
        debug!(country = %self.selected.iso_code, "Country selected");

        true
    }

    /// Open or close the dropdown. Does nothing while disabled.
    pub fn toggle_dropdown(&mut self) {
        if self.disabled {
            return;
        }
        self.dropdown_open.set(!self.dropdown_open.get());
    }

    /// Enter or leave read-only mode. Entering it closes the dropdown and
    /// drops focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dropdown_open.set(false);
            self.focused = false;
        }
    }

    /// The number field gained focus. Does nothing while disabled.
    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    /// The number field lost focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Close the dropdown on clicks outside the country selector.
    ///
    /// The registration lasts until [`destroy`](Self::destroy) or until the
    /// control is dropped. Attaching again replaces the previous registration.
    pub fn attach_outside_click(&mut self, clicks: &ListenerSet<ClickEvent>) {
        let open = Rc::clone(&self.dropdown_open);
        self.outside_click = Some(clicks.subscribe(move |event: &ClickEvent| {
            if !event.inside_selector && open.get() {
                open.set(false);
            }
        }));
    }

    /// Release everything the control registered with the host.
    pub fn destroy(&mut self) {
        if let Some(subscription) = self.outside_click.take() {
            subscription.cancel();
        }
    }

    pub fn outputs(&self) -> ControlOutputs {
        ControlOutputs {
            phone_number: self.value.clone(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn value(&self) -> &NormalizedValue {
        &self.value
    }

    pub fn selected(&self) -> &CountryEntry {
        &self.selected
    }

    pub fn allowed(&self) -> &[CountryEntry] {
        &self.allowed
    }

    pub fn pattern(&self) -> &FormatPattern {
        &self.pattern
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open.get()
    }

    /// Rows for the dropdown, in registry order.
    pub fn country_options(&self) -> Vec<CountryOption> {
        self.allowed
            .iter()
            .map(|entry| CountryOption {
                iso_code: entry.iso_code.clone(),
                flag: self.show_flags.then(|| entry.flag.clone()),
                dial_code: entry.dial_code.clone(),
                name: entry.display_name.clone(),
                selected: entry.iso_code == self.selected.iso_code,
            })
            .collect()
    }

    /// Label of the selector button: flag (if enabled) and dial code.
    pub fn selected_label(&self) -> String {
        if self.show_flags {
            format!("{} {}", self.selected.flag, self.selected.dial_code)
        } else {
            self.selected.dial_code.to_string()
        }
    }

    /// Re-derive the selection and display text from the stored value.
    fn render_value(&mut self) {
        if self.value.is_empty() {
            self.digits = Digits::default();
            self.display.clear();
            return;
        }

        let parts = decompose(self.value.as_str(), &self.allowed, &self.selected);
        let selected = parts.entry.clone();
        self.display = format(parts.digits.as_str(), &self.pattern);
        self.digits = parts.digits;
        self.selected = selected;
    }
}
