//! Single-option flattening.
use crate::config::OptionValue;

/// Flatten one declared option into runner tokens.
///
/// `flag` is `None` for positional values. Absent and empty values produce no
/// tokens at all, so an unset option never shows up as a bare flag.
pub fn parse_option(flag: Option<&str>, value: &OptionValue) -> Vec<String> {
    parse_values(flag, &value.values())
}

/// Flatten already-extracted values, repeating `flag` before each one.
pub fn parse_values<S: AsRef<str>>(flag: Option<&str>, values: &[S]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(values.len() * 2);
    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        if let Some(flag) = flag {
            tokens.push(flag.to_string());
        }
        tokens.push(value.to_string());
    }
    tokens
}
