//! Output sink: one line per surviving record on stdout, warnings on stderr.

use std::io::{self, Write};

use crate::record::TimestampedUrl;
use crate::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Bare URLs, structurally deduplicated.
    #[default]
    Plain,
    /// `<RFC 3339 timestamp> <url>`, every exact-unique capture.
    Dated,
}

impl OutputMode {
    pub fn from_dates_flag(dates: bool) -> Self {
        if dates {
            OutputMode::Dated
        } else {
            OutputMode::Plain
        }
    }
}

pub struct OutputSink<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> OutputSink<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn emit_plain(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "{}", url)
    }

    /// An unparseable timestamp is reported and replaced by a placeholder.
    pub fn emit_dated(&mut self, record: &TimestampedUrl) -> io::Result<()> {
        let date = match timestamp::to_rfc3339(&record.date) {
            Ok(date) => date,
            Err(_) => {
                self.warn(format_args!(
                    "failed to parse date [{}] for URL [{}]",
                    record.date, record.url
                ));
                timestamp::PLACEHOLDER.to_string()
            }
        };
        writeln!(self.out, "{} {}", date, record.url)
    }

    /// Best effort: a broken stderr never stops output.
    pub fn warn(&mut self, message: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.err, "{}", message);
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
