//! Archive records as produced by a source fetcher.

/// One snapshot entry: a URL and the raw archive timestamp it was captured at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampedUrl {
    /// Raw source timestamp (`YYYYMMDDhhmmss` for both supported archives).
    pub date: String,
    pub url: String,
}

impl TimestampedUrl {
    pub fn new(date: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            url: url.into(),
        }
    }
}
