//! Wayback Machine CDX API adapter.
//!
//! The JSON output is one array of rows; the first row names the columns
//! (`urlkey, timestamp, original, ...`) and every other row is a capture.

use serde_json::Value;

use super::{http, subdomain_wildcard, FetchError, SourceFetcher};
use crate::record::TimestampedUrl;

const TIMESTAMP_COLUMN: usize = 1;
const ORIGINAL_COLUMN: usize = 2;

#[derive(Debug, Clone)]
pub struct WaybackSource {
    endpoint: String,
    user_agent: String,
}

impl WaybackSource {
    pub fn new(endpoint: &str, user_agent: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    /// One capture per distinct URL key. The domain is inserted verbatim.
    pub fn query_url(&self, domain: &str, exclude_subdomains: bool) -> String {
        format!(
            "{}?url={}{}/*&output=json&collapse=urlkey",
            self.endpoint,
            subdomain_wildcard(exclude_subdomains),
            domain
        )
    }
}

impl SourceFetcher for WaybackSource {
    fn name(&self) -> &str {
        "wayback"
    }

    fn fetch(
        &self,
        domain: &str,
        exclude_subdomains: bool,
    ) -> Result<Vec<TimestampedUrl>, FetchError> {
        let body = http::get(&self.query_url(domain, exclude_subdomains), &self.user_agent)?;
        parse_cdx_json(&body)
    }
}

/// Parse a CDX JSON body. Rows without a timestamp and original column are skipped.
pub(crate) fn parse_cdx_json(body: &[u8]) -> Result<Vec<TimestampedUrl>, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let rows: Vec<Value> = serde_json::from_slice(body)?;
    let records = rows
        .iter()
        .skip(1)
        .filter_map(|row| {
            let cols = row.as_array()?;
            let date = cols.get(TIMESTAMP_COLUMN)?.as_str()?;
            let url = cols.get(ORIGINAL_COLUMN)?.as_str()?;
            Some(TimestampedUrl::new(date, url))
        })
        .collect();
    Ok(records)
}
