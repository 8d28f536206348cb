// SPDX-License-Identifier: PMPL-1.0-or-later
//! Hardened page fetcher with SSRF protection and resource ceilings.
//!
//! Validates the target URL, rejects loopback/private/link-local hosts,
//! and retrieves the document under a hard timeout, redirect cap, and
//! byte ceiling. The body is decoded as lossy UTF-8 and round-tripped
//! through the HTML parser so downstream checks always see a canonical
//! tree, even for malformed markup.
//!
//! DNS failure during the blocklist check is fail-open: the fetch is still
//! attempted so that transient resolver errors do not produce false
//! positives. The client re-resolves when it connects.

use std::net::IpAddr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::redirect::Policy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, warn};
use url::Url;

use crate::error::FetchError;

/// Hard ceiling on the fetched document size.
pub const MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// Request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 15;

/// Maximum redirects to follow.
pub const MAX_REDIRECTS: usize = 5;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 AccessibilityAnalyzer/1.0";

/// Host literals rejected outright.
const BLOCKED_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0"];

/// A successfully fetched and normalized document.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Round-tripped serialization of the parsed tree.
    pub html: String,
    /// Text of the `<title>` element, if any.
    pub title: Option<String>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
    /// Size of the normalized document.
    pub byte_size: usize,
}

/// SSRF-hardened fetcher wrapping a shared `reqwest::Client`.
///
/// The client is built once (timeout, redirect policy, user agent) and is
/// safe to share across concurrent requests; construct with a custom
/// client to substitute transport behavior in tests.
pub struct SafeFetcher {
    client: Client,
}

impl SafeFetcher {
    /// Create a fetcher with the default hardened client.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Create a fetcher around an externally configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and normalize a document.
    ///
    /// Fails with `InvalidUrl`, `BlockedTarget`, `Timeout`, `TooLarge`, or
    /// `Network`; never returns partial content.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| FetchError::InvalidUrl("missing host".to_string()))?;

        self.check_target(host).await?;

        info!("Fetching: {}", parsed);

        let mut response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "server returned HTTP {}",
                status
            )));
        }

        // Reject oversized documents before reading any of the body.
        check_declared_size(response.content_length())?;

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_transport_error)? {
            push_bounded(&mut body, &chunk)?;
        }

        let text = String::from_utf8_lossy(&body);
        let document = Html::parse_document(&text);

        let title_selector = Selector::parse("title").expect("valid selector");
        let title = document
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let html = document.html();
        let byte_size = html.len();

        Ok(FetchResult {
            html,
            title,
            fetched_at: Utc::now(),
            byte_size,
        })
    }

    /// Reject blocked hosts: literal localhost names, and any host whose
    /// address (literal or resolved) falls in a private/loopback range.
    async fn check_target(&self, host: &str) -> Result<(), FetchError> {
        if BLOCKED_HOSTS.contains(&host.to_lowercase().as_str()) {
            return Err(FetchError::BlockedTarget);
        }

        if let Ok(addr) = host.parse::<IpAddr>() {
            if is_blocked_addr(&addr) {
                return Err(FetchError::BlockedTarget);
            }
            return Ok(());
        }

        // Port is irrelevant here; lookup_host requires one.
        match tokio::net::lookup_host((host, 80)).await {
            Ok(addrs) => {
                if any_blocked_addr(addrs.map(|a| a.ip())) {
                    return Err(FetchError::BlockedTarget);
                }
            }
            Err(e) => {
                // Fail open: transient resolver errors must not block the
                // fetch. The connecting client resolves again.
                warn!("DNS resolution failed for {} during blocklist check: {}", host, e);
            }
        }

        Ok(())
    }
}

impl Default for SafeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an address falls inside a blocked range:
/// 127.0.0.0/8, 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16, 169.254.0.0/16,
/// plus the unspecified address and their IPv6 equivalents.
pub fn is_blocked_addr(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => {
            let octets = v4.octets();
            v4.is_loopback()
                || v4.is_unspecified()
                || octets[0] == 10
                || (octets[0] == 172 && (16..=31).contains(&octets[1]))
                || (octets[0] == 192 && octets[1] == 168)
                || (octets[0] == 169 && octets[1] == 254)
        }
        IpAddr::V6(v6) => v6.is_loopback() || v6.is_unspecified(),
    }
}

/// Whether any resolved address for a hostname falls in a blocked range.
fn any_blocked_addr(addrs: impl IntoIterator<Item = IpAddr>) -> bool {
    addrs.into_iter().any(|addr| is_blocked_addr(&addr))
}

/// Reject a response whose declared `Content-Length` exceeds the ceiling.
fn check_declared_size(declared: Option<u64>) -> Result<(), FetchError> {
    match declared {
        Some(size) if size as usize > MAX_CONTENT_SIZE => Err(FetchError::TooLarge),
        _ => Ok(()),
    }
}

/// Append a body chunk, aborting once the accumulated size crosses the
/// ceiling. Undeclared (chunked) bodies are bounded by this alone.
fn push_bounded(body: &mut Vec<u8>, chunk: &[u8]) -> Result<(), FetchError> {
    body.extend_from_slice(chunk);
    if body.len() > MAX_CONTENT_SIZE {
        return Err(FetchError::TooLarge);
    }
    Ok(())
}

fn map_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_redirect() {
        FetchError::Network("too many redirects".to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}
