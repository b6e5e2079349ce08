//! HTTP utilities for URL import and the Gist backup

use std::time::Duration;
use url::Url;

/// Timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the blocking agent shared by all requests
pub fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("bam/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Fetch content from a URL
pub fn fetch_url(url_str: &str) -> anyhow::Result<String> {
    let url = Url::parse(url_str)?;

    if url.scheme() != "https" && url.scheme() != "http" {
        anyhow::bail!("Only HTTP/HTTPS URLs are supported");
    }

    let response = match agent().request_url("GET", &url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            anyhow::bail!("HTTP request failed with status: {}", code)
        }
        Err(err) => return Err(err.into()),
    };

    Ok(response.into_string()?)
}

/// Check if a string is a valid URL
pub fn is_url(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        url.scheme() == "http" || url.scheme() == "https"
    } else {
        false
    }
}
