//! In-memory sources for unit tests.

use super::{FetchError, SourceFetcher};
use crate::record::TimestampedUrl;

/// Returns a fixed list, optionally after a delay.
pub(crate) struct StaticSource {
    pub name: &'static str,
    pub records: Vec<TimestampedUrl>,
    pub delay: Option<std::time::Duration>,
}

impl StaticSource {
    pub fn urls(name: &'static str, urls: &[&str]) -> Self {
        Self {
            name,
            records: urls
                .iter()
                .map(|u| TimestampedUrl::new("20180520101010", *u))
                .collect(),
            delay: None,
        }
    }

    pub fn records(name: &'static str, records: Vec<TimestampedUrl>) -> Self {
        Self {
            name,
            records,
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl SourceFetcher for StaticSource {
    fn name(&self) -> &str {
        self.name
    }

    fn fetch(&self, _domain: &str, _exclude: bool) -> Result<Vec<TimestampedUrl>, FetchError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        Ok(self.records.clone())
    }
}

/// Always fails like an archive returning 503.
pub(crate) struct FailingSource;

impl SourceFetcher for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn fetch(&self, domain: &str, _exclude: bool) -> Result<Vec<TimestampedUrl>, FetchError> {
        Err(FetchError::Status {
            url: format!("http://archive.invalid/?url={domain}"),
            status: 503,
        })
    }
}

pub(crate) struct PanickingSource;

impl SourceFetcher for PanickingSource {
    fn name(&self) -> &str {
        "panicking"
    }

    fn fetch(&self, _domain: &str, _exclude: bool) -> Result<Vec<TimestampedUrl>, FetchError> {
        panic!("source blew up");
    }
}
