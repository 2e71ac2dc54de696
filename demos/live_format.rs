//! Example replaying keystrokes through a phone input control.
//!
//! Shows the display text and normalized value after every keystroke, then a
//! country switch and an externally supplied value.
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=phone_pattern=debug cargo run --example live_format
//! ```

use phone_pattern::{ControlConfig, PhoneInputControl};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Live Formatting Demo ===\n");

    let config = ControlConfig::builder()
        .allowed_country_codes("US,CA,GB,AU")
        .build();
    let mut control = PhoneInputControl::init(&config);

    println!("Countries:");
    for option in control.country_options() {
        println!(
            "  {} {:<5} {}",
            option.flag.as_deref().unwrap_or(" "),
            option.dial_code.as_str(),
            option.name
        );
    }

    println!("\n{:<12} {:<20} {:<20}", "Key", "Display", "Value");
    println!("{}", "-".repeat(52));

    let mut field = String::new();
    for key in "55512345678".chars() {
        field.push(key);
        let outcome = control.handle_input(&field);
        println!("{:<12} {:<20} {:<20}", key, outcome.display, outcome.value.as_str());
        field = outcome.display;
    }

    control.select_country("AU");
    let outcome = control.handle_input(&field);
    println!("\nAfter selecting {}: {}", control.selected_label(), outcome.value);

    let external = config.with_phone_number("+447911123456");
    control.update_view(&external);
    println!(
        "External value {} -> {} {}",
        external.phone_number,
        control.selected().display_name,
        control.display()
    );
}
