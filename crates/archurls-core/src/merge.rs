//! Fan-in merge of concurrent source fetches.
//!
//! Every source runs on its own blocking worker, fetches its full result
//! list, then pushes records one at a time into a single-slot channel. A
//! closer task waits for every worker before dropping the last sender, so the
//! stream ends only when all sources are done, failed or not.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::record::TimestampedUrl;
use crate::scope;
use crate::source::SourceFetcher;

/// Smallest buffer tokio allows; a send waits until the consumer takes the slot.
const HANDOFF_CAPACITY: usize = 1;

/// Start every source for `domain` and return the merged stream.
///
/// With `exclude_subdomains`, records whose host isn't exactly `domain` are
/// dropped before they are sent. A failing or panicking source contributes
/// nothing and is only logged. Must be called from within a tokio runtime.
pub fn fan_in(
    domain: &str,
    exclude_subdomains: bool,
    sources: &[Arc<dyn SourceFetcher>],
) -> mpsc::Receiver<TimestampedUrl> {
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);

    let mut workers = tokio::task::JoinSet::new();
    for source in sources {
        let source = Arc::clone(source);
        let domain = domain.to_string();
        let tx = tx.clone();
        workers.spawn_blocking(move || produce(source.as_ref(), &domain, exclude_subdomains, &tx));
    }

    tokio::spawn(async move {
        while let Some(res) = workers.join_next().await {
            if let Err(e) = res {
                tracing::warn!("source worker did not finish: {}", e);
            }
        }
        drop(tx);
    });

    rx
}

/// Fetch from one source and hand its records to the consumer, in source order.
fn produce(
    source: &dyn SourceFetcher,
    domain: &str,
    exclude_subdomains: bool,
    tx: &mpsc::Sender<TimestampedUrl>,
) {
    let records = match source.fetch(domain, exclude_subdomains) {
        Ok(records) => records,
        Err(e) => {
            tracing::debug!(source = source.name(), domain, "fetch failed: {}", e);
            return;
        }
    };

    let fetched = records.len();
    let mut sent = 0usize;
    for record in records {
        if exclude_subdomains && scope::is_foreign_host(&record.url, domain) {
            continue;
        }
        if tx.blocking_send(record).is_err() {
            tracing::debug!(source = source.name(), domain, "consumer gone, stopping");
            return;
        }
        sent += 1;
    }
    tracing::debug!(source = source.name(), domain, fetched, sent, "source finished");
}
