//! Core types used throughout the validation system

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::InvalidInput;
use super::options::{BoolOptions, FloatOptions, IntOptions, IpOptions, RegexOptions, UrlOptions};

/// All kinds of validation the system can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Email,
    Int,
    Ip,
    Url,
    Bool,
    Float,
    Regex,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::Email => "email",
            FilterKind::Int => "int",
            FilterKind::Ip => "ip",
            FilterKind::Url => "url",
            FilterKind::Bool => "bool",
            FilterKind::Float => "float",
            FilterKind::Regex => "regex",
        };
        f.write_str(name)
    }
}

/// A validation kind together with its options.
///
/// Filters can be built in code or read from JSON, where the kind is given
/// by a `"kind"` field and the options sit next to it:
///
/// ```
/// use filter_validate::{Filter, ValidatedValue};
///
/// let filter = Filter::from_json(r#"{"kind": "int", "range": {"min": 1, "max": 10}}"#).unwrap();
/// assert_eq!(filter.apply("7"), Ok(ValidatedValue::Int(7)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    Email,
    Int(IntOptions),
    Ip(IpOptions),
    Url(UrlOptions),
    Bool(BoolOptions),
    Float(FloatOptions),
    Regex(RegexOptions),
}

impl Filter {
    /// Reads a filter from its JSON configuration
    pub fn from_json(config: &str) -> Result<Self> {
        serde_json::from_str(config).context("Failed to parse filter configuration")
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Email => FilterKind::Email,
            Filter::Int(_) => FilterKind::Int,
            Filter::Ip(_) => FilterKind::Ip,
            Filter::Url(_) => FilterKind::Url,
            Filter::Bool(_) => FilterKind::Bool,
            Filter::Float(_) => FilterKind::Float,
            Filter::Regex(_) => FilterKind::Regex,
        }
    }

    /// Validates `value` with this filter's kind and options
    pub fn apply(&self, value: &str) -> Result<ValidatedValue, InvalidInput> {
        match self {
            Filter::Email => super::email(value).map(ValidatedValue::Text),
            Filter::Int(options) => super::int(value, options).map(ValidatedValue::Int),
            Filter::Ip(options) => super::ip(value, options).map(ValidatedValue::Text),
            Filter::Url(options) => super::url(value, options).map(ValidatedValue::Text),
            Filter::Bool(options) => super::boolean(value, options).map(ValidatedValue::Bool),
            Filter::Float(options) => super::float(value, options).map(ValidatedValue::Float),
            Filter::Regex(options) => super::regex(value, options).map(ValidatedValue::Text),
        }
    }

    /// Writes `value` back as text that this filter validates to the same value.
    ///
    /// Floats use the filter's own decimal separator. Returns `None` for a
    /// boolean that failed to parse, since no input validates to it.
    pub fn render(&self, value: &ValidatedValue) -> Option<String> {
        match (self, value) {
            (_, ValidatedValue::Bool(None)) => None,
            (Filter::Float(options), ValidatedValue::Float(x)) => {
                Some(x.to_string().replacen('.', &options.decimal.to_string(), 1))
            }
            _ => Some(value.to_string()),
        }
    }
}

/// The normalized value produced by a successful validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedValue {
    Text(String),
    Int(i64),
    Float(f64),
    /// `None` only when a boolean filter with `null_on_fail` could not parse its input
    Bool(Option<bool>),
}

/// Plain formatting: floats use `.` and a failed boolean prints nothing.
/// See [`Filter::render`] for text a given filter accepts again.
impl fmt::Display for ValidatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatedValue::Text(text) => f.write_str(text),
            ValidatedValue::Int(n) => write!(f, "{}", n),
            ValidatedValue::Float(x) => write!(f, "{}", x),
            ValidatedValue::Bool(Some(b)) => write!(f, "{}", b),
            ValidatedValue::Bool(None) => Ok(()),
        }
    }
}
