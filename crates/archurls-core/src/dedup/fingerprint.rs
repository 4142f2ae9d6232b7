//! Structural URL fingerprints.
//!
//! Two URLs share a fingerprint when they have the same host, the same path
//! once every digit run is collapsed, and the same ordered query key names.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::OnceLock;

/// Replaces each maximal run of ASCII digits in a path.
const DIGIT_PLACEHOLDER: &str = "1";

fn digit_runs() -> &'static Regex {
    static DIGIT_RUNS: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUNS.get_or_init(|| Regex::new("[0-9]+").expect("valid digit-run regex"))
}

/// The structural shape of a URL, before hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintKey {
    /// Host including an explicit port, as written in the authority.
    pub host: String,
    pub normalized_path: String,
    /// Query parameter names in order, duplicates kept.
    pub query_keys: Vec<String>,
}

impl FingerprintKey {
    /// Extract the key from a raw URL. An unparseable URL yields the empty key.
    pub fn from_url(raw: &str) -> Self {
        let Ok(parsed) = url::Url::parse(raw) else {
            return Self::default();
        };

        Self {
            host: authority_host(raw).to_string(),
            normalized_path: normalize_path(parsed.path()),
            query_keys: query_keys(parsed.query().unwrap_or_default()),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha256::new();
        hasher.update(self.host.as_bytes());
        hasher.update(self.normalized_path.as_bytes());
        for key in &self.query_keys {
            hasher.update(key.as_bytes());
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Fingerprint(bytes)
    }
}

/// 128-bit digest of a [`FingerprintKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 16]);

impl Fingerprint {
    pub fn of_url(raw: &str) -> Self {
        FingerprintKey::from_url(raw).fingerprint()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Host and port exactly as written in `raw`, without any `user@` prefix.
///
/// Case and default ports (`:80`) are kept. Empty when there is no `//` authority.
fn authority_host(raw: &str) -> &str {
    let Some((_, rest)) = raw.split_once("://") else {
        return "";
    };
    let end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
    let authority = &rest[..end];
    match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    }
}

/// Collapse every maximal digit run to a single placeholder.
pub fn normalize_path(path: &str) -> String {
    digit_runs()
        .replace_all(path, DIGIT_PLACEHOLDER)
        .into_owned()
}

/// Names of the `&`-separated query parameters. An empty query is one empty key.
pub fn query_keys(raw_query: &str) -> Vec<String> {
    raw_query
        .split('&')
        .map(|param| param.split('=').next().unwrap_or_default().to_string())
        .collect()
}
