//! Per-domain processing: fan-in, then dedup, then output.

use std::io::{self, Write};
use std::sync::Arc;

use crate::dedup::{DedupRegistry, Verdict};
use crate::merge;
use crate::output::{OutputMode, OutputSink};
use crate::source::SourceFetcher;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub mode: OutputMode,
    /// Keep only URLs whose host is exactly the target domain.
    pub exclude_subdomains: bool,
}

/// Counts for one domain, logged when the domain is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSummary {
    pub received: usize,
    pub emitted: usize,
    pub exact_duplicates: usize,
    pub structural_duplicates: usize,
    pub assets: usize,
    pub too_short: usize,
}

/// Aggregate every source for `domain` and write the surviving records to `sink`.
///
/// A fresh [`DedupRegistry`] is created here and dropped on return, so nothing
/// carries over between domains. Only output write errors are returned.
pub async fn process_domain<W: Write, E: Write>(
    domain: &str,
    opts: &RunOptions,
    sources: &[Arc<dyn SourceFetcher>],
    sink: &mut OutputSink<W, E>,
) -> io::Result<DomainSummary> {
    let mut registry = DedupRegistry::new();
    let mut summary = DomainSummary::default();
    let mut records = merge::fan_in(domain, opts.exclude_subdomains, sources);

    while let Some(record) = records.recv().await {
        summary.received += 1;
        if !registry.admit_exact(&record.url) {
            summary.exact_duplicates += 1;
            continue;
        }

        match opts.mode {
            OutputMode::Dated => {
                sink.emit_dated(&record)?;
                summary.emitted += 1;
            }
            OutputMode::Plain => match registry.admit_structural(&record.url) {
                Verdict::Admit => {
                    sink.emit_plain(&record.url)?;
                    summary.emitted += 1;
                }
                Verdict::Duplicate => summary.structural_duplicates += 1,
                Verdict::Asset => summary.assets += 1,
                Verdict::TooShort => {
                    summary.too_short += 1;
                    sink.warn(format_args!(
                        "skipping URL [{}]: too short to classify",
                        record.url
                    ));
                }
            },
        }
    }
    sink.flush()?;

    tracing::info!(
        domain,
        received = summary.received,
        emitted = summary.emitted,
        exact_duplicates = summary.exact_duplicates,
        structural_duplicates = summary.structural_duplicates,
        assets = summary.assets,
        too_short = summary.too_short,
        unique_urls = registry.unique_urls(),
        patterns = registry.patterns(),
        "domain done"
    );
    Ok(summary)
}
