//! Floating point validation

use std::iter::Peekable;
use std::str::Chars;

use log::debug;

use super::trim_whitespace;
use crate::validation::constants::THOUSANDS_SEPARATORS;
use crate::validation::error::InvalidInput;
use crate::validation::options::FloatOptions;

/// Parses `value` as a float using the configured decimal separator.
///
/// With `allow_thousands`, the integer part may be grouped by `'`, `,` or `.`:
/// the first group holds one to three digits and every following group exactly
/// three. When the decimal separator is also a grouping character, it is read
/// as the decimal separator. An exponent (`e` or `E`, optionally signed) may
/// follow. Non-finite results are rejected.
pub fn parse_float(value: &str, options: &FloatOptions) -> Result<f64, InvalidInput> {
    let trimmed = trim_whitespace(value);
    let normalized = normalize(trimmed, options).map_err(|reason| {
        debug!("Float rejected: {:?} {}", trimmed, reason);
        InvalidInput
    })?;

    let parsed: f64 = normalized.parse().map_err(|_| {
        debug!("Float rejected: {:?} does not parse", trimmed);
        InvalidInput
    })?;

    if !parsed.is_finite() {
        debug!("Float rejected: {:?} is not finite", trimmed);
        return Err(InvalidInput);
    }

    Ok(parsed)
}

/// Rewrites the input into Rust float syntax: group separators dropped and
/// the decimal separator replaced by `.`
fn normalize(input: &str, options: &FloatOptions) -> Result<String, &'static str> {
    let mut chars = input.chars().peekable();
    let mut normalized = String::with_capacity(input.len());

    if let Some(&sign @ ('+' | '-')) = chars.peek() {
        normalized.push(sign);
        chars.next();
    }

    let mut first_group = true;
    let mut mantissa_digits = 0;

    loop {
        let group = push_digits(&mut chars, &mut normalized);
        mantissa_digits += group;

        match chars.peek().copied() {
            None => {
                if !first_group && group != 3 {
                    return Err("has a misplaced group separator");
                }
                break;
            }
            Some(c) if c == options.decimal || c == 'e' || c == 'E' => {
                if !first_group && group != 3 {
                    return Err("has a misplaced group separator");
                }
                if c == options.decimal {
                    chars.next();
                    normalized.push('.');
                    mantissa_digits += push_digits(&mut chars, &mut normalized);
                }
                if let Some(&('e' | 'E')) = chars.peek() {
                    chars.next();
                    normalized.push('e');
                    if let Some(&sign @ ('+' | '-')) = chars.peek() {
                        normalized.push(sign);
                        chars.next();
                    }
                    if push_digits(&mut chars, &mut normalized) == 0 {
                        return Err("has an empty exponent");
                    }
                }
                break;
            }
            Some(c) if options.allow_thousands && THOUSANDS_SEPARATORS.contains(&c) => {
                let well_placed = if first_group {
                    (1..=3).contains(&group)
                } else {
                    group == 3
                };
                if !well_placed {
                    return Err("has a misplaced group separator");
                }
                first_group = false;
                chars.next();
            }
            Some(_) => return Err("contains an unexpected character"),
        }
    }

    if chars.next().is_some() {
        return Err("has trailing characters");
    }
    if mantissa_digits == 0 {
        return Err("has no digits");
    }

    Ok(normalized)
}

fn push_digits(chars: &mut Peekable<Chars<'_>>, out: &mut String) -> usize {
    let mut count = 0;
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        chars.next();
        count += 1;
    }
    count
}
