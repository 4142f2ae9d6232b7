//! Static asset rejection for plain output.

/// Trailing three bytes that mark a URL as a static asset.
///
/// Literal suffix compare, not an extension parse: `/dasvg` matches too.
const ASSET_SUFFIXES: [&[u8; 3]; 5] = [b"svg", b"css", b"jpg", b"png", b"gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixCheck {
    Keep,
    Asset,
    /// Fewer than three bytes: there is no suffix to compare.
    TooShort,
}

pub fn check_suffix(url: &str) -> SuffixCheck {
    let bytes = url.as_bytes();
    let Some(start) = bytes.len().checked_sub(3) else {
        return SuffixCheck::TooShort;
    };
    let tail = &bytes[start..];
    if ASSET_SUFFIXES.iter().any(|suffix| tail == &suffix[..]) {
        SuffixCheck::Asset
    } else {
        SuffixCheck::Keep
    }
}
