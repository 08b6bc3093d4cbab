//! Integer validation

use log::debug;

use super::trim_whitespace;
use crate::validation::error::InvalidInput;
use crate::validation::options::IntOptions;

/// Parses `value` as an integer and checks it against the configured range.
///
/// Decimal input may carry a sign but no leading zeros (`0`, `+0` and `-0`
/// are fine). Hexadecimal input is `0x` or `0X` followed by hex digits, octal
/// input is `0` (optionally `0o` or `0O`) followed by octal digits; neither
/// takes a sign.
pub fn parse_int(value: &str, options: &IntOptions) -> Result<i64, InvalidInput> {
    let trimmed = trim_whitespace(value);

    let parsed = if options.allow_hex && has_hex_prefix(trimmed) {
        parse_radix(&trimmed[2..], 16)
    } else if options.allow_octal && trimmed.len() > 1 && trimmed.starts_with('0') {
        let digits = &trimmed[1..];
        let digits = digits
            .strip_prefix('o')
            .or_else(|| digits.strip_prefix('O'))
            .unwrap_or(digits);
        parse_radix(digits, 8)
    } else {
        parse_decimal(trimmed)
    };

    let parsed = parsed.ok_or_else(|| {
        debug!("Int rejected: {:?} is not a well-formed integer", trimmed);
        InvalidInput
    })?;

    if !options.range.contains(parsed) {
        debug!(
            "Int rejected: {} is outside [{}, {}]",
            parsed,
            options.range.min(),
            options.range.max()
        );
        return Err(InvalidInput);
    }

    Ok(parsed)
}

fn has_hex_prefix(value: &str) -> bool {
    value.starts_with("0x") || value.starts_with("0X")
}

/// Parses unsigned digits in the given radix, failing on overflow
fn parse_radix(digits: &str, radix: u32) -> Option<i64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

fn parse_decimal(value: &str) -> Option<i64> {
    let unsigned = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);

    if unsigned == "0" {
        return Some(0);
    }

    let mut chars = unsigned.chars();
    match chars.next() {
        Some('1'..='9') => {}
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }

    value.parse().ok()
}
