//! Archive timestamp parsing for dated output.

use chrono::{NaiveDateTime, SecondsFormat};

/// Capture timestamp layout used by both archives (UTC, second precision).
const ARCHIVE_LAYOUT: &str = "%Y%m%d%H%M%S";

/// Printed in place of a timestamp that couldn't be parsed.
pub const PLACEHOLDER: &str = "0001-01-01T00:00:00Z";

/// Reformat a raw archive timestamp as RFC 3339, e.g. `2018-05-20T10:10:10Z`.
pub fn to_rfc3339(raw: &str) -> Result<String, chrono::ParseError> {
    let parsed = NaiveDateTime::parse_from_str(raw, ARCHIVE_LAYOUT)?;
    Ok(parsed
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}
