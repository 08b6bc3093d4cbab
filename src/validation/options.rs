//! Typed option sets, one per validator kind.
//!
//! Options are checked when they are built: an inverted integer range, an
//! unusable decimal separator or a pattern that does not compile is refused
//! with an [`OptionsError`] before any value is validated. All option types
//! can also be read from a serialized configuration.

use log::warn;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::constants::DEFAULT_DECIMAL_SEPARATOR;
use super::error::OptionsError;

/// Inclusive integer range, guaranteed to have `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntRangeConfig", into = "IntRangeConfig")]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    pub fn new(min: i64, max: i64) -> Result<Self, OptionsError> {
        if max < min {
            warn!("Refusing integer range with max {} below min {}", max, min);
            return Err(OptionsError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range from `min` up to the largest representable integer
    pub fn at_least(min: i64) -> Self {
        Self { min, max: i64::MAX }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for IntRange {
    fn default() -> Self {
        Self::at_least(0)
    }
}

#[derive(Serialize, Deserialize)]
struct IntRangeConfig {
    #[serde(default)]
    min: i64,
    #[serde(default = "default_max")]
    max: i64,
}

fn default_max() -> i64 {
    i64::MAX
}

impl TryFrom<IntRangeConfig> for IntRange {
    type Error = OptionsError;

    fn try_from(config: IntRangeConfig) -> Result<Self, Self::Error> {
        IntRange::new(config.min, config.max)
    }
}

impl From<IntRange> for IntRangeConfig {
    fn from(range: IntRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

/// Options for integer validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntOptions {
    pub(crate) range: IntRange,
    pub(crate) allow_hex: bool,
    pub(crate) allow_octal: bool,
}

impl IntOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, range: IntRange) -> Self {
        self.range = range;
        self
    }

    /// Accepts `0x`-prefixed hexadecimal input
    pub fn allow_hex(mut self, allow: bool) -> Self {
        self.allow_hex = allow;
        self
    }

    /// Accepts `0`-prefixed (or `0o`-prefixed) octal input
    pub fn allow_octal(mut self, allow: bool) -> Self {
        self.allow_octal = allow;
        self
    }
}

/// Address families an IP validation accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpFamily {
    #[default]
    Any,
    V4Only,
    V6Only,
}

impl IpFamily {
    /// Maps the pair of "only v4" / "only v6" switches onto a family.
    /// Setting both is the same as setting neither: either family is accepted.
    pub fn from_flags(only_v4: bool, only_v6: bool) -> Self {
        match (only_v4, only_v6) {
            (true, false) => IpFamily::V4Only,
            (false, true) => IpFamily::V6Only,
            _ => IpFamily::Any,
        }
    }
}

/// Options for IP address validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpOptions {
    pub(crate) family: IpFamily,
    pub(crate) no_private: bool,
    pub(crate) no_reserved: bool,
}

impl IpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags(only_v4: bool, only_v6: bool, no_private: bool, no_reserved: bool) -> Self {
        Self {
            family: IpFamily::from_flags(only_v4, only_v6),
            no_private,
            no_reserved,
        }
    }

    pub fn family(mut self, family: IpFamily) -> Self {
        self.family = family;
        self
    }

    /// Rejects addresses in private ranges
    pub fn no_private(mut self, reject: bool) -> Self {
        self.no_private = reject;
        self
    }

    /// Rejects addresses in reserved ranges
    pub fn no_reserved(mut self, reject: bool) -> Self {
        self.no_reserved = reject;
        self
    }
}

/// Options for URL validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    pub(crate) require_path: bool,
    pub(crate) require_query: bool,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_path(mut self, require: bool) -> Self {
        self.require_path = require;
        self
    }

    pub fn require_query(mut self, require: bool) -> Self {
        self.require_query = require;
        self
    }
}

/// Options for boolean validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolOptions {
    pub(crate) null_on_fail: bool,
}

impl BoolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a failed parse as `Ok(None)` rather than an error
    pub fn null_on_fail(mut self, null_on_fail: bool) -> Self {
        self.null_on_fail = null_on_fail;
        self
    }
}

/// Options for float validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatOptions {
    #[serde(deserialize_with = "deserialize_decimal")]
    pub(crate) decimal: char,
    pub(crate) allow_thousands: bool,
}

impl Default for FloatOptions {
    fn default() -> Self {
        Self {
            decimal: DEFAULT_DECIMAL_SEPARATOR,
            allow_thousands: false,
        }
    }
}

impl FloatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decimal separator. Digits, signs and exponent markers are refused.
    pub fn decimal(mut self, separator: char) -> Result<Self, OptionsError> {
        self.decimal = check_decimal(separator)?;
        Ok(self)
    }

    /// Same as [`FloatOptions::decimal`], for separators coming in as text
    pub fn decimal_str(self, separator: &str) -> Result<Self, OptionsError> {
        self.decimal(decimal_from_str(separator)?)
    }

    /// Accepts `'`, `,` and `.` as thousands separators
    pub fn allow_thousands(mut self, allow: bool) -> Self {
        self.allow_thousands = allow;
        self
    }
}

fn check_decimal(separator: char) -> Result<char, OptionsError> {
    if separator.is_ascii_digit() || matches!(separator, '+' | '-' | 'e' | 'E') {
        warn!("Refusing decimal separator {:?}", separator);
        return Err(OptionsError::DecimalSeparator(separator.to_string()));
    }
    Ok(separator)
}

fn decimal_from_str(separator: &str) -> Result<char, OptionsError> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => check_decimal(c),
        _ => {
            warn!("Refusing decimal separator {:?}", separator);
            Err(OptionsError::DecimalSeparator(separator.to_string()))
        }
    }
}

fn deserialize_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
    let raw = String::deserialize(deserializer)?;
    decimal_from_str(&raw).map_err(serde::de::Error::custom)
}

/// Options for regular expression validation, holding the compiled pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RegexConfig", into = "RegexConfig")]
pub struct RegexOptions {
    pub(crate) regex: Regex,
}

impl RegexOptions {
    pub fn new(pattern: &str) -> Result<Self, OptionsError> {
        let regex = Regex::new(pattern).map_err(|e| {
            warn!("Refusing regular expression {:?}: {}", pattern, e);
            OptionsError::from(e)
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for RegexOptions {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

#[derive(Serialize, Deserialize)]
struct RegexConfig {
    pattern: String,
}

impl TryFrom<RegexConfig> for RegexOptions {
    type Error = OptionsError;

    fn try_from(config: RegexConfig) -> Result<Self, Self::Error> {
        RegexOptions::new(&config.pattern)
    }
}

impl From<RegexOptions> for RegexConfig {
    fn from(options: RegexOptions) -> Self {
        Self {
            pattern: options.regex.as_str().to_owned(),
        }
    }
}
