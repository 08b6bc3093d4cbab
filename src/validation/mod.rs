//! Root module for the validation system.
//! Exposes one function per supported kind, each validating a single raw
//! value and returning its normalized form.

mod constants;
mod error;
mod options;
mod types;
pub mod validators;

pub use constants::*;
pub use error::{InvalidInput, OptionsError};
pub use options::{
    BoolOptions, FloatOptions, IntOptions, IntRange, IpFamily, IpOptions, RegexOptions, UrlOptions,
};
pub use types::{Filter, FilterKind, ValidatedValue};

/// Validates `value` as an email address and returns it unchanged.
pub fn email(value: &str) -> Result<String, InvalidInput> {
    validators::email::validate_email(value)?;
    Ok(value.to_owned())
}

/// Validates `value` as an integer within the configured inclusive range.
///
/// Surrounding whitespace is ignored. Hexadecimal (`0x1F`) and octal (`017`)
/// notations are only understood when enabled in `options`.
pub fn int(value: &str, options: &IntOptions) -> Result<i64, InvalidInput> {
    validators::int::parse_int(value, options)
}

/// Validates `value` as an IPv4 or IPv6 address and returns it unchanged.
pub fn ip(value: &str, options: &IpOptions) -> Result<String, InvalidInput> {
    validators::ip::parse_ip(value, options)?;
    Ok(value.to_owned())
}

/// Validates `value` as an absolute URL and returns it unchanged.
pub fn url(value: &str, options: &UrlOptions) -> Result<String, InvalidInput> {
    validators::url::validate_url(value, options)?;
    Ok(value.to_owned())
}

/// Validates `value` as a boolean literal.
///
/// Returns `Ok(Some(_))` for a recognized literal. An unrecognized value is
/// an error, unless `null_on_fail` is set, in which case it gives `Ok(None)`.
pub fn boolean(value: &str, options: &BoolOptions) -> Result<Option<bool>, InvalidInput> {
    match validators::boolean::parse_bool(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) if options.null_on_fail => Ok(None),
        Err(e) => Err(e),
    }
}

/// Validates `value` as a floating point number.
pub fn float(value: &str, options: &FloatOptions) -> Result<f64, InvalidInput> {
    validators::float::parse_float(value, options)
}

/// Validates that `value` matches the pattern and returns it unchanged.
///
/// The match is a search: the pattern must be anchored with `^` and `$` to
/// require the whole value to match.
pub fn regex(value: &str, options: &RegexOptions) -> Result<String, InvalidInput> {
    validators::pattern::validate_pattern(value, options)?;
    Ok(value.to_owned())
}
