//! Common Crawl index API adapter (newline-delimited JSON, one capture per line).

use serde::Deserialize;

use super::{http, subdomain_wildcard, FetchError, SourceFetcher};
use crate::record::TimestampedUrl;

#[derive(Debug, Clone)]
pub struct CommonCrawlSource {
    endpoint: String,
    index: String,
    user_agent: String,
}

/// The fields we need from one index line; the rest are ignored.
#[derive(Debug, Deserialize)]
struct IndexLine {
    url: String,
    timestamp: String,
}

impl CommonCrawlSource {
    pub fn new(endpoint: &str, index: &str, user_agent: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            index: index.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn query_url(&self, domain: &str, exclude_subdomains: bool) -> String {
        format!(
            "{}/{}?url={}{}/*&output=json",
            self.endpoint,
            self.index,
            subdomain_wildcard(exclude_subdomains),
            domain
        )
    }
}

impl SourceFetcher for CommonCrawlSource {
    fn name(&self) -> &str {
        "commoncrawl"
    }

    fn fetch(
        &self,
        domain: &str,
        exclude_subdomains: bool,
    ) -> Result<Vec<TimestampedUrl>, FetchError> {
        let body = http::get(&self.query_url(domain, exclude_subdomains), &self.user_agent)?;
        Ok(parse_index_lines(&body))
    }
}

/// Lines that don't decode are skipped; the rest of the body is still used.
pub(crate) fn parse_index_lines(body: &[u8]) -> Vec<TimestampedUrl> {
    body.split(|b| *b == b'\n')
        .filter_map(|line| serde_json::from_slice::<IndexLine>(line).ok())
        .map(|line| TimestampedUrl::new(line.timestamp, line.url))
        .collect()
}
