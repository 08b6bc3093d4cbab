//! Stateless input validators.
//!
//! Each supported kind (email, integer, IP address, URL, boolean, float and
//! regular expression) has a single function that checks a raw textual value
//! against the kind's grammar and the options given, and hands back the
//! normalized value. A failed validation is always reported through the
//! return value, never through a panic.
//!
//! ```
//! use filter_validate::{int, IntOptions, IntRange};
//!
//! let options = IntOptions::new().range(IntRange::new(1, 100).unwrap());
//! assert_eq!(int("42", &options), Ok(42));
//! assert!(int("101", &options).is_err());
//! ```

pub mod validation;

pub use validation::{
    boolean, email, float, int, ip, regex, url, BoolOptions, Filter, FilterKind, FloatOptions,
    IntOptions, IntRange, InvalidInput, IpFamily, IpOptions, OptionsError, RegexOptions,
    UrlOptions, ValidatedValue,
};
