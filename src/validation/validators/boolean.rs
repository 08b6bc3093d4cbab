//! Boolean validation

use log::debug;

use super::trim_whitespace;
use crate::validation::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::validation::error::InvalidInput;

/// Parses one of the boolean literals, ignoring case and surrounding whitespace.
///
/// `1`, `true`, `on` and `yes` are `true`; `0`, `false`, `off`, `no` and the
/// empty string are `false`.
pub fn parse_bool(value: &str) -> Result<bool, InvalidInput> {
    let trimmed = trim_whitespace(value);
    if trimmed.is_empty() {
        return Ok(false);
    }

    let lowered = trimmed.to_ascii_lowercase();
    if TRUE_LITERALS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        debug!("Bool rejected: {:?} is not a boolean literal", trimmed);
        Err(InvalidInput)
    }
}
