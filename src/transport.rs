//! HTTP transport used by [`crate::client::NsClient`].
//!
//! This module provides the [`Transport`] trait, the single seam between the
//! client and the network, and [`HttpTransport`], its reqwest implementation.

use log::debug;
use mockall::automock;
use reqwest::Client;

use crate::error::{Error, Result};

/// Performs GET requests and returns the whole response body.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Transport {
    /// Fetch `url` and read its body to the end.
    ///
    /// Connection failures and non-success statuses are reported as
    /// [`Error::ApiRequestFailure`].
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Transport`] backed by a reqwest [`Client`].
///
/// # Examples
///
/// ```no_run
/// use nsapi::transport::{HttpTransport, Transport};
///
/// # async fn run() -> nsapi::Result<()> {
/// let transport = HttpTransport::new("MyTool/1.0 (by: Testlandia)")?;
/// let body = transport.get("https://www.nationstates.net/cgi-bin/api.cgi?nation=testlandia&v=4").await?;
/// println!("{}", String::from_utf8_lossy(&body));
/// # Ok(())
/// # }
/// ```
pub struct HttpTransport {
    /// HTTP client
    client: Client,
}

impl HttpTransport {
    /// Create a new [HttpTransport].
    ///
    /// # Arguments
    ///
    /// * `user_agent` - Sent with every request, NationStates requires it to
    ///   identify the tool and how to reach its author.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `user_agent` is empty or is not a
    /// valid header value.
    pub fn new(user_agent: &str) -> Result<Self> {
        if user_agent.trim().is_empty() {
            return Err(Error::invalid_argument("the user agent must not be empty"));
        }

        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::invalid_argument(format!("invalid user agent '{user_agent}': {e}")))?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!("request {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::request_failure(format!("GET {url}"), e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::request_failure(format!("read body of {url}"), e))?;

        debug!("response from {} -> {} ({} bytes)", url, status, body.len());

        Ok(body.to_vec())
    }
}
