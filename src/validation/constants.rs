//! Constants used throughout the validation system

use std::net::{Ipv4Addr, Ipv6Addr};

/// Maximum length of an email address, in bytes
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum length of a hostname, without its trailing root dot
pub const MAX_HOSTNAME_LENGTH: usize = 253;
/// Maximum length of a single hostname label
pub const MAX_LABEL_LENGTH: usize = 63;

/// URL schemes that may omit the host component
pub const HOSTLESS_SCHEMES: [&str; 3] = ["mailto", "news", "file"];

/// Case-insensitive literals accepted as `true`
pub const TRUE_LITERALS: [&str; 4] = ["1", "true", "on", "yes"];
/// Case-insensitive literals accepted as `false`. The empty string is `false` too.
pub const FALSE_LITERALS: [&str; 4] = ["0", "false", "off", "no"];

pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';
/// Characters accepted as thousands-grouping separators
pub const THOUSANDS_SEPARATORS: [char; 3] = ['\'', ',', '.'];

/// Private IPv4 networks (RFC 1918)
pub const PRIVATE_V4: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// Unique local IPv6 addresses (RFC 4193)
pub const PRIVATE_V6: [(Ipv6Addr, u8); 1] = [(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7)];

/// Reserved IPv4 networks: "this" network, loopback, link-local and the class E block
pub const RESERVED_V4: [(Ipv4Addr, u8); 4] = [
    (Ipv4Addr::new(0, 0, 0, 0), 8),
    (Ipv4Addr::new(127, 0, 0, 0), 8),
    (Ipv4Addr::new(169, 254, 0, 0), 16),
    (Ipv4Addr::new(240, 0, 0, 0), 4),
];

/// Reserved IPv6 networks
pub const RESERVED_V6: [(Ipv6Addr, u8); 5] = [
    // unspecified
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0), 128),
    // loopback
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1), 128),
    // IPv4-mapped
    (Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0, 0), 96),
    // link-local
    (Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10),
    // documentation
    (Ipv6Addr::new(0x2001, 0x0db8, 0, 0, 0, 0, 0, 0), 32),
];
