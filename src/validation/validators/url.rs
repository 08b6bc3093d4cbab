//! URL validation

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use url::{Host, Url};

use crate::validation::constants::{HOSTLESS_SCHEMES, MAX_HOSTNAME_LENGTH};
use crate::validation::error::InvalidInput;
use crate::validation::options::UrlOptions;

// Alphanumeric label of at most 63 characters, hyphens only inside
static HOSTNAME_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$")
        .expect("Failed to compile hostname label regex")
});

/// Components of a URL as written, before any normalization
#[derive(Debug, PartialEq, Eq)]
struct RawComponents<'a> {
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
}

impl<'a> RawComponents<'a> {
    fn split(value: &'a str) -> Option<Self> {
        let (_, rest) = value.split_once(':')?;

        let (authority, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Some(Self {
            authority,
            path,
            query,
        })
    }
}

/// Validates an absolute URL.
///
/// Only printable ASCII is allowed. A host is mandatory except for the
/// `mailto`, `news` and `file` schemes, and `http`/`https` hosts must be valid
/// hostnames or IP literals. Path and query presence are judged on the text as
/// written, so `http://example.com` has no path while `http://example.com/` does.
pub fn validate_url(value: &str, options: &UrlOptions) -> Result<(), InvalidInput> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_graphic()) {
        debug!("URL rejected: {:?} contains characters outside printable ASCII", value);
        return Err(InvalidInput);
    }

    let parsed = Url::parse(value).map_err(|e| {
        debug!("URL rejected: {:?} does not parse: {}", value, e);
        InvalidInput
    })?;

    let components = RawComponents::split(value).ok_or_else(|| {
        debug!("URL rejected: {:?} has no scheme", value);
        InvalidInput
    })?;

    let scheme = parsed.scheme();
    if !HOSTLESS_SCHEMES.contains(&scheme)
        && (components.authority.is_none() || parsed.host().is_none())
    {
        debug!("URL rejected: {:?} has no host", value);
        return Err(InvalidInput);
    }

    if matches!(scheme, "http" | "https") {
        // The parsed host is already decoded, so the check runs on the text as written
        let host = components.authority.map(raw_host).unwrap_or_default();
        let valid_host = match parsed.host() {
            Some(Host::Ipv6(_)) => host.starts_with('[') && host.ends_with(']'),
            Some(Host::Domain(_)) | Some(Host::Ipv4(_)) => is_valid_hostname(host),
            None => false,
        };
        if !valid_host {
            debug!("URL rejected: {:?} has an invalid hostname", value);
            return Err(InvalidInput);
        }
    }

    if options.require_path && components.path.is_empty() {
        debug!("URL rejected: {:?} has no path", value);
        return Err(InvalidInput);
    }

    if options.require_query && components.query.is_none() {
        debug!("URL rejected: {:?} has no query", value);
        return Err(InvalidInput);
    }

    Ok(())
}

/// Host part of an authority as written, without userinfo or port
fn raw_host(authority: &str) -> &str {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host_port.starts_with('[') {
        return host_port.find(']').map_or(host_port, |end| &host_port[..=end]);
    }
    host_port.split_once(':').map_or(host_port, |(host, _)| host)
}

/// Checks a DNS hostname: alphanumeric labels with inner hyphens
pub fn is_valid_hostname(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() || host.len() > MAX_HOSTNAME_LENGTH {
        return false;
    }

    host.split('.').all(|label| HOSTNAME_LABEL_REGEX.is_match(label))
}
