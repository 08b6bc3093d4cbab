use filter_validate::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_int_range_and_hex() {
    init_logging();

    let options = IntOptions::new().range(IntRange::new(5, 10).unwrap());
    assert_eq!(int("5", &options), Ok(5));
    assert_eq!(int("10", &options), Ok(10));
    assert_eq!(int("4", &options), Err(InvalidInput));
    assert_eq!(int("11", &options), Err(InvalidInput));

    assert_eq!(int("0x1F", &IntOptions::new().allow_hex(true)), Ok(31));
    assert_eq!(int("0x1F", &IntOptions::new()), Err(InvalidInput));
}

#[test]
fn test_inverted_range_is_refused_at_the_boundary() {
    assert!(matches!(
        IntRange::new(10, 5),
        Err(OptionsError::InvertedRange { min: 10, max: 5 })
    ));
}

#[test]
fn test_email() {
    init_logging();

    assert_eq!(email("user@example.com"), Ok("user@example.com".to_string()));
    assert_eq!(email("not-an-email"), Err(InvalidInput));
}

#[test]
fn test_ip() {
    init_logging();

    assert_eq!(ip("192.168.1.1", &IpOptions::new()), Ok("192.168.1.1".to_string()));
    assert_eq!(ip("192.168.1.1", &IpOptions::new().no_private(true)), Err(InvalidInput));

    assert_eq!(ip("::1", &IpOptions::new()), Ok("::1".to_string()));
    assert_eq!(ip("::1", &IpOptions::new().family(IpFamily::V4Only)), Err(InvalidInput));
    assert_eq!(ip("::1", &IpOptions::from_flags(true, false, false, false)), Err(InvalidInput));
}

#[test]
fn test_url() {
    init_logging();

    let plain = UrlOptions::new();
    let with_path = UrlOptions::new().require_path(true);

    assert_eq!(url("http://example.com", &plain), Ok("http://example.com".to_string()));
    assert_eq!(url("http://example.com", &with_path), Err(InvalidInput));
    assert_eq!(
        url("http://example.com/path", &with_path),
        Ok("http://example.com/path".to_string())
    );
}

#[test]
fn test_bool() {
    init_logging();

    assert_eq!(boolean("1", &BoolOptions::new()), Ok(Some(true)));
    assert_eq!(boolean("false", &BoolOptions::new()), Ok(Some(false)));
    assert_eq!(boolean("maybe", &BoolOptions::new()), Err(InvalidInput));
    assert_eq!(boolean("maybe", &BoolOptions::new().null_on_fail(true)), Ok(None));
    // An explicit false stays distinguishable from a failure
    assert_eq!(boolean("no", &BoolOptions::new().null_on_fail(true)), Ok(Some(false)));
}

#[test]
fn test_float() {
    init_logging();

    assert_eq!(float("1,234.56", &FloatOptions::new().allow_thousands(true)), Ok(1234.56));
    assert_eq!(float("1,234.56", &FloatOptions::new()), Err(InvalidInput));
    assert_eq!(float("2,5", &FloatOptions::new().decimal_str(",").unwrap()), Ok(2.5));
}

#[test]
fn test_regex() {
    init_logging();

    let options = RegexOptions::new("^[a-z]+[0-9]+$").unwrap();
    assert_eq!(regex("abc123", &options), Ok("abc123".to_string()));
    assert_eq!(regex("123abc", &options), Err(InvalidInput));
}

#[test]
fn test_filters_from_config() {
    init_logging();

    let cases = vec![
        (r#"{"kind": "email"}"#, "user@example.com", true),
        (r#"{"kind": "int", "range": {"min": 1, "max": 3}}"#, "4", false),
        (r#"{"kind": "ip", "family": "v6_only"}"#, "10.0.0.1", false),
        (r#"{"kind": "url", "require_query": true}"#, "https://example.com/?a=b", true),
        (r#"{"kind": "bool"}"#, "on", true),
        (r#"{"kind": "float", "allow_thousands": true}"#, "12'000", true),
        (r#"{"kind": "regex", "pattern": "^\\d{4}$"}"#, "2024", true),
    ];

    for (config, input, should_pass) in cases {
        let filter = Filter::from_json(config).unwrap();
        assert_eq!(filter.apply(input).is_ok(), should_pass,
                   "Unexpected result for {} with {}", input, config);
    }
}

#[test]
fn test_revalidating_normalized_values() {
    let int_options = IntOptions::new().allow_octal(true);
    let first = int("017", &int_options).unwrap();
    assert_eq!(int(&first.to_string(), &int_options), Ok(first));

    let float_options = FloatOptions::new().allow_thousands(true);
    let first = float("12,345.5", &float_options).unwrap();
    assert_eq!(float(&first.to_string(), &float_options), Ok(first));

    let first = email("user@example.com").unwrap();
    assert_eq!(email(&first), Ok(first.clone()));

    let first = url("http://example.com/a?b=c", &UrlOptions::new()).unwrap();
    assert_eq!(url(&first, &UrlOptions::new()), Ok(first.clone()));
}

#[test]
fn test_concurrent_use() {
    let options = RegexOptions::new("^ok$").unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(regex("ok", &options).is_ok());
                    assert!(int("42", &IntOptions::new()).is_ok());
                }
            });
        }
    });
}
