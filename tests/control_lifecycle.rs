//! Integration tests driving the control through a host lifecycle.
//!
//! Each test plays the host: it builds a property bag, calls init, feeds input
//! events and update cycles, reads outputs and finally tears down.

use phone_pattern::{ClickEvent, ControlConfig, ListenerSet, PhoneInputControl};

/// Property bag as a host would serialize it.
fn host_config(phone_number: &str) -> ControlConfig {
    let json = format!(
        r#"{{
            "formatPattern": "(###) ###-####",
            "defaultCountryCode": "US",
            "allowedCountryCodes": "US, CA, GB",
            "placeholderText": "Phone",
            "showCountryFlags": true,
            "phoneNumber": "{phone_number}"
        }}"#
    );
    ControlConfig::from_json(&json).unwrap()
}

/// Test a full session: init, typing, switching country, external update, teardown.
#[test]
fn test_full_session() {
    let clicks = ListenerSet::new();
    let mut control = PhoneInputControl::init(&host_config(""));
    control.attach_outside_click(&clicks);

    assert_eq!(control.placeholder(), "Phone");
    assert_eq!(control.allowed().len(), 3);

    // Keystrokes arrive with whatever the field currently shows.
    let mut field = String::new();
    for key in "5551234567".chars() {
        field.push(key);
        let outcome = control.handle_input(&field);
        field = outcome.display;
    }
    assert_eq!(field, "(555) 123-4567");
    assert_eq!(control.outputs().phone_number.as_str(), "+15551234567");

    // Open the dropdown, click elsewhere, open again and pick GB.
    control.toggle_dropdown();
    clicks.emit(&ClickEvent {
        inside_selector: false,
    });
    assert!(!control.is_dropdown_open());

    control.toggle_dropdown();
    clicks.emit(&ClickEvent {
        inside_selector: true,
    });
    assert!(control.select_country("GB"));
    let outcome = control.handle_input(&field);
    assert_eq!(outcome.value.as_str(), "+445551234567");

    // The host echoes our own value back: nothing changes.
    let echoed = host_config(outcome.value.as_str());
    assert!(!control.update_view(&echoed));
    assert_eq!(control.selected().iso_code, "GB");

    // Another form writes a Canadian number; "+1" resolves to US first.
    assert!(control.update_view(&host_config("+16135550123")));
    assert_eq!(control.selected().iso_code, "US");
    assert_eq!(control.display(), "(613) 555-0123");

    control.destroy();
    assert!(clicks.is_empty());
}

/// Test that a stored value with a code outside the allow-list keeps the default.
#[test]
fn test_stored_value_outside_allow_list() {
    let control = PhoneInputControl::init(&host_config("+4930123456"));
    assert_eq!(control.selected().iso_code, "US");
    assert_eq!(control.display(), "(493) 012-3456");
}

/// Test read-only mode toggled by the host.
#[test]
fn test_host_toggles_read_only() {
    let mut control = PhoneInputControl::init(&host_config("+15551234567"));

    control.update_view(&host_config("+15551234567").with_disabled(true));
    let outcome = control.handle_input("999");
    assert!(!outcome.changed);
    assert_eq!(outcome.display, "(555) 123-4567");

    control.update_view(&host_config("+15551234567").with_disabled(false));
    let outcome = control.handle_input("999");
    assert!(outcome.changed);
    assert_eq!(control.outputs().phone_number.as_str(), "+1999");
}

/// Test that outputs serialize in the host's field naming.
#[test]
fn test_outputs_json() {
    let control = PhoneInputControl::init(&host_config("+447911123456"));
    let json = serde_json::to_string(&control.outputs()).unwrap();
    assert_eq!(json, r#"{"phoneNumber":"+447911123456"}"#);
}

/// Test that an all-defaults property bag behaves like the stock widget.
#[test]
fn test_empty_property_bag() {
    let config = ControlConfig::from_json("{}").unwrap();
    let mut control = PhoneInputControl::init(&config);
    assert_eq!(control.selected().iso_code, "US");
    assert_eq!(control.placeholder(), "Enter phone number");
    assert_eq!(control.handle_input("415").display, "(415");
}
