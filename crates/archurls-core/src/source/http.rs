//! Blocking HTTP GET via libcurl.

use super::FetchError;

/// Fetches `url` and returns the whole body.
///
/// Follows redirects. No timeout: a hung archive stalls the caller.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub(super) fn get(url: &str, user_agent: &str) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(user_agent)?;
    easy.follow_location(true)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    tracing::trace!(url, bytes = body.len(), "archive response");
    Ok(body)
}
