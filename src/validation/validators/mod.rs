//! Kind-specific validation functions

pub mod boolean;
pub mod email;
pub mod float;
pub mod int;
pub mod ip;
pub mod pattern;
pub mod url;

/// Strips the whitespace that numeric and boolean inputs may carry around them
pub(crate) fn trim_whitespace(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        assert_eq!(trim_whitespace(" \t42\r\n"), "42");
        assert_eq!(trim_whitespace("\x0B1\x0B"), "1");
        // Only ASCII whitespace is trimmed
        assert_eq!(trim_whitespace("\u{a0}1"), "\u{a0}1");
    }
}
