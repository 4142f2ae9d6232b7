//! Two-layer deduplication for one domain's merged stream.
//!
//! The exact layer drops literal repeats of a URL string. The structural
//! layer (plain output only) drops asset URLs and URLs whose fingerprint was
//! already admitted, so `?id=1` / `?id=2` or `/item/42` / `/item/907` are
//! printed once.

mod asset;
mod fingerprint;

pub use asset::{check_suffix, SuffixCheck};
pub use fingerprint::{normalize_path, query_keys, Fingerprint, FingerprintKey};

use std::collections::HashSet;

/// Outcome of the structural layer for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    /// Static asset by literal suffix.
    Asset,
    /// Shorter than the three bytes the asset check needs.
    TooShort,
    /// Same shape as a URL already admitted.
    Duplicate,
}

/// Per-domain dedup state. Create one per domain; never share across domains.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    seen_urls: HashSet<String>,
    /// Append-only, in admission order; membership is a linear scan.
    fingerprints: Vec<Fingerprint>,
}

impl DedupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact layer: true the first time `url` is offered, false for repeats.
    pub fn admit_exact(&mut self, url: &str) -> bool {
        if self.seen_urls.contains(url) {
            return false;
        }
        self.seen_urls.insert(url.to_string());
        true
    }

    /// Structural layer, for URLs that already passed [`Self::admit_exact`].
    pub fn admit_structural(&mut self, url: &str) -> Verdict {
        match check_suffix(url) {
            SuffixCheck::Keep => {}
            SuffixCheck::Asset => return Verdict::Asset,
            SuffixCheck::TooShort => return Verdict::TooShort,
        }

        let fingerprint = Fingerprint::of_url(url);
        if self.fingerprints.iter().any(|seen| *seen == fingerprint) {
            return Verdict::Duplicate;
        }
        tracing::trace!(%fingerprint, url, "new structural pattern");
        self.fingerprints.push(fingerprint);
        Verdict::Admit
    }

    pub fn unique_urls(&self) -> usize {
        self.seen_urls.len()
    }

    pub fn patterns(&self) -> usize {
        self.fingerprints.len()
    }
}
