//! CLI for archurls.

mod input;

use anyhow::{Context, Result};
use archurls_core::config;
use archurls_core::output::{OutputMode, OutputSink};
use archurls_core::pipeline::{self, RunOptions};
use archurls_core::source;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Fetch every URL web archives have recorded for a domain.
#[derive(Debug, Parser)]
#[command(name = "archurls")]
#[command(about = "Fetch every URL the Wayback Machine and Common Crawl know for a domain", long_about = None)]
pub struct Cli {
    /// Target domain. When omitted, domains are read from stdin, one per line.
    pub domain: Option<String>,

    /// Prefix each URL with its capture date. Disables structural dedup.
    #[arg(long)]
    pub dates: bool,

    /// Only keep URLs whose host is exactly the target domain.
    #[arg(long)]
    pub no_subs: bool,

    /// Read configuration from this file instead of ~/.config/archurls/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log per-domain counts and source failures to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            mode: OutputMode::from_dates_flag(self.dates),
            exclude_subdomains: self.no_subs,
        }
    }

    /// Process each domain in turn. Only config and stdout failures are errors.
    pub async fn run(self) -> Result<()> {
        let cfg = config::load(self.config.as_deref()).context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let sources = source::from_config(&cfg);
        if sources.is_empty() {
            tracing::warn!("every archive source is disabled in the config");
        }

        let opts = self.run_options();
        let domains = match self.domain {
            Some(domain) => vec![domain],
            None => input::read_domains(io::stdin().lock(), &mut io::stderr()),
        };

        let mut sink = OutputSink::new(BufWriter::new(io::stdout().lock()), io::stderr());
        for domain in &domains {
            pipeline::process_domain(domain, &opts, &sources, &mut sink)
                .await
                .with_context(|| format!("write results for {}", domain))?;
        }
        Ok(())
    }
}
