use crate::constants::{CELSIUS_SUFFIX, FAHRENHEIT_SUFFIX};

/// Text for the temperature display. The flag only picks the suffix; the
/// number is shown as entered.
pub fn format_temperature(temperature: f32, use_celsius: bool) -> String {
    let unit = if use_celsius {
        CELSIUS_SUFFIX
    } else {
        FAHRENHEIT_SUFFIX
    };
    format!("{temperature} {unit}")
}
