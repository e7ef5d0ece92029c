//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a `#rrggbb` color.
pub(crate) fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if stellar_common::Rgb::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a #rrggbb color"));
    }
}
