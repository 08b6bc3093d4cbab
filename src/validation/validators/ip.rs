//! IP address validation

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use log::debug;

use crate::validation::constants::{PRIVATE_V4, PRIVATE_V6, RESERVED_V4, RESERVED_V6};
use crate::validation::error::InvalidInput;
use crate::validation::options::{IpFamily, IpOptions};

/// Parses `value` as an IP address and applies the family and range restrictions.
///
/// IPv4 must be a strict dotted quad without leading zeros. IPv6 accepts every
/// RFC 4291 text form, including an embedded IPv4 tail, but no zone index.
pub fn parse_ip(value: &str, options: &IpOptions) -> Result<IpAddr, InvalidInput> {
    let addr = if value.contains(':') {
        value.parse::<Ipv6Addr>().map(IpAddr::V6).ok()
    } else if value.contains('.') {
        value.parse::<Ipv4Addr>().map(IpAddr::V4).ok()
    } else {
        None
    };

    let addr = addr.ok_or_else(|| {
        debug!("IP rejected: {:?} is not an address", value);
        InvalidInput
    })?;

    match (options.family, addr) {
        (IpFamily::V4Only, IpAddr::V6(_)) | (IpFamily::V6Only, IpAddr::V4(_)) => {
            debug!("IP rejected: {} is outside the allowed family {:?}", addr, options.family);
            return Err(InvalidInput);
        }
        _ => {}
    }

    if options.no_private && is_private(&addr) {
        debug!("IP rejected: {} is in a private range", addr);
        return Err(InvalidInput);
    }

    if options.no_reserved && is_reserved(&addr) {
        debug!("IP rejected: {} is in a reserved range", addr);
        return Err(InvalidInput);
    }

    Ok(addr)
}

pub fn is_private(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => PRIVATE_V4.iter().any(|&net| in_v4_network(*v4, net)),
        IpAddr::V6(v6) => PRIVATE_V6.iter().any(|&net| in_v6_network(*v6, net)),
    }
}

pub fn is_reserved(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => RESERVED_V4.iter().any(|&net| in_v4_network(*v4, net)),
        IpAddr::V6(v6) => RESERVED_V6.iter().any(|&net| in_v6_network(*v6, net)),
    }
}

fn in_v4_network(addr: Ipv4Addr, (network, prefix): (Ipv4Addr, u8)) -> bool {
    let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
    u32::from(addr) & mask == u32::from(network) & mask
}

fn in_v6_network(addr: Ipv6Addr, (network, prefix): (Ipv6Addr, u8)) -> bool {
    let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
    u128::from(addr) & mask == u128::from(network) & mask
}
