//! Regular expression validation

use log::debug;

use crate::validation::error::InvalidInput;
use crate::validation::options::RegexOptions;

/// Checks that the pattern matches somewhere in `value`
pub fn validate_pattern(value: &str, options: &RegexOptions) -> Result<(), InvalidInput> {
    if !options.regex.is_match(value) {
        debug!("Regex rejected: {:?} does not match {:?}", value, options.pattern());
        return Err(InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_pattern() {
        let options = RegexOptions::new("^[a-z]+[0-9]+$").unwrap();
        assert!(validate_pattern("abc123", &options).is_ok());
        assert!(validate_pattern("123abc", &options).is_err());
        assert!(validate_pattern("abc123 ", &options).is_err());
    }

    #[test]
    fn test_unanchored_pattern_searches() {
        let options = RegexOptions::new("[0-9]+").unwrap();
        assert!(validate_pattern("abc123def", &options).is_ok());
        assert!(validate_pattern("abcdef", &options).is_err());
    }
}
