/**
 * SSR Sidecar Client
 *
 * Sends the resolved page to a JavaScript SSR process and returns the
 * rendered head tags and body markup.
 *
 * # Contract
 *
 * `GET {ssr_url}/render` with the page JSON as request body. The sidecar
 * answers with:
 *
 * ```json
 * { "head": ["<title>Users</title>"], "body": "<div id=\"app\">...</div>" }
 * ```
 *
 * # Failure Classes
 *
 * Anything that goes wrong while talking to the sidecar (connect error,
 * timeout, non-2xx status, undecodable body) is a `Communication` error; the
 * renderer falls back to the HTML bootstrap for those. A bad URL or a client
 * that cannot be built is fatal.
 */

use crate::shared::ResolvedPage;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Markup returned by the SSR sidecar
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SsrResponse {
    /// Tags to place in the document head
    #[serde(default)]
    pub head: Vec<String>,
    /// Rendered root element
    pub body: String,
}

impl SsrResponse {
    /// Head tags joined into one fragment
    pub fn head_html(&self) -> String {
        self.head.join("\n")
    }
}

/// SSR sidecar errors
#[derive(Debug, Error)]
pub enum SsrError {
    /// The sidecar could not be reached or answered with garbage
    #[error("could not communicate with SSR server: {message}")]
    Communication {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The configured sidecar URL is not usable
    #[error("invalid SSR URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// The HTTP client could not be created
    #[error("SSR client setup failed: {message}")]
    Setup { message: String },
}

impl SsrError {
    pub fn communication(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Communication {
            message: message.into(),
            source,
        }
    }

    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Whether the renderer may fall back to client-side rendering
    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication { .. })
    }
}

/// HTTP client for the SSR sidecar
#[derive(Debug, Clone)]
pub struct SsrClient {
    client: Client,
    render_url: Url,
}

impl SsrClient {
    /// Create a client for the sidecar at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SsrError> {
        let joined = format!("{}/render", base_url.trim_end_matches('/'));
        let render_url = Url::parse(&joined).map_err(|e| SsrError::invalid_url(base_url, e.to_string()))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SsrError::Setup { message: e.to_string() })?;

        Ok(Self { client, render_url })
    }

    /// Endpoint the page is sent to
    pub fn render_url(&self) -> &Url {
        &self.render_url
    }

    /// Render `page` on the sidecar
    pub async fn render(&self, page: &ResolvedPage) -> Result<SsrResponse, SsrError> {
        tracing::debug!(component = %page.component, url = %self.render_url, "Calling SSR sidecar");

        let response = self
            .client
            .get(self.render_url.clone())
            .json(page)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() { "request timed out" } else { "request failed" };
                SsrError::communication(message, Some(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SsrError::communication(format!("unexpected status {}", status), None));
        }

        response
            .json::<SsrResponse>()
            .await
            .map_err(|e| SsrError::communication("response body could not be decoded", Some(e)))
    }
}
