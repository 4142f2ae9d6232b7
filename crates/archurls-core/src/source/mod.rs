//! Archive sources.
//!
//! The aggregation engine only depends on the [`SourceFetcher`] trait; each
//! archive adapter builds its own query and parses its own response shape.

mod common_crawl;
mod http;
mod wayback;

#[cfg(test)]
pub(crate) mod fixtures;

pub use common_crawl::CommonCrawlSource;
pub use wayback::WaybackSource;

use std::sync::Arc;

use crate::config::ArchurlsConfig;
use crate::record::TimestampedUrl;

/// Why a whole source contributed nothing for a domain.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u32 },
    #[error("decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Implemented by each archive adapter.
///
/// `fetch` blocks until the full result list is available; the merger runs it
/// on a blocking worker.
pub trait SourceFetcher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn fetch(
        &self,
        domain: &str,
        exclude_subdomains: bool,
    ) -> Result<Vec<TimestampedUrl>, FetchError>;
}

/// Builds the enabled sources in a fixed order: Wayback, then Common Crawl.
pub fn from_config(cfg: &ArchurlsConfig) -> Vec<Arc<dyn SourceFetcher>> {
    let mut sources: Vec<Arc<dyn SourceFetcher>> = Vec::new();
    if cfg.wayback.enabled {
        sources.push(Arc::new(WaybackSource::new(
            &cfg.wayback.endpoint,
            &cfg.user_agent,
        )));
    }
    if cfg.common_crawl.enabled {
        sources.push(Arc::new(CommonCrawlSource::new(
            &cfg.common_crawl.endpoint,
            &cfg.common_crawl.index,
            &cfg.user_agent,
        )));
    }
    sources
}

/// Host pattern prefix that makes an archive match subdomains too.
fn subdomain_wildcard(exclude_subdomains: bool) -> &'static str {
    if exclude_subdomains {
        ""
    } else {
        "*."
    }
}
