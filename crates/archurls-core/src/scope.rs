//! Subdomain filter for `--no-subs`.

/// True if `raw_url` should be dropped because its host is not exactly `domain`.
///
/// Host comparison is ASCII case-insensitive and literal (no suffix match).
/// Fails open: a URL that doesn't parse is kept. A parsed URL without a host
/// never matches the domain, so it is dropped.
pub fn is_foreign_host(raw_url: &str, domain: &str) -> bool {
    let Ok(parsed) = url::Url::parse(raw_url) else {
        return false;
    };
    match parsed.host_str() {
        Some(host) => !host.eq_ignore_ascii_case(domain),
        None => true,
    }
}
