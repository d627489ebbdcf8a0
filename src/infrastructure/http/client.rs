//! Thin GET/POST helper that only reports the status code.
//!
//! `https` URLs go through a client that trusts every certificate and host
//! name: with rustls, `danger_accept_invalid_certs` drops the whole server
//! verifier, name check included.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder};
use thiserror::Error;
use tracing::{debug, error, warn};

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Path every node serves for liveness checks.
pub const PING_PATH: &str = "/health/ping";

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP GET {url} failed: {source}")]
    GetFailure {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP POST {url} failed: {source}")]
    PostFailure {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build TLS client: {0}")]
    SslClientFailure(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Applied to connecting and to the whole request
    pub timeout: Duration,
    /// Port the peer nodes listen on
    pub server_port: u16,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            server_port: 8100,
        }
    }
}

#[derive(Clone)]
pub struct HttpClient {
    plain: Client,
    trust_all: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, HttpClientError> {
        let plain = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(HttpClientError::ClientBuild)?;

        let trust_all = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build trust-all TLS client");
                HttpClientError::SslClientFailure(e)
            })?;

        Ok(Self {
            plain,
            trust_all,
            config,
        })
    }

    fn client_for(&self, url: &str) -> &Client {
        if url.starts_with("https") {
            &self.trust_all
        } else {
            &self.plain
        }
    }

    fn prepare(&self, builder: RequestBuilder, cookies: Option<&BTreeMap<String, String>>) -> RequestBuilder {
        let builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        match cookies.and_then(cookie_header) {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    /// GET `url`, returning the response status code.
    pub async fn get(
        &self,
        url: &str,
        cookies: Option<&BTreeMap<String, String>>,
    ) -> Result<u16, HttpClientError> {
        let request = self.prepare(self.client_for(url).get(url), cookies);

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url, status, "HTTP GET completed");
                Ok(status)
            }
            Err(source) => {
                error!(url, error = %source, "HTTP GET failed");
                Err(HttpClientError::GetFailure {
                    url: url.to_string(),
                    source,
                })
            }
        }
    }

    /// POST the raw JSON `body` to `url`, returning the response status code.
    pub async fn post(
        &self,
        url: &str,
        body: &str,
        cookies: Option<&BTreeMap<String, String>>,
    ) -> Result<u16, HttpClientError> {
        let request = self
            .prepare(self.client_for(url).post(url), cookies)
            .body(body.to_string());

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url, status, "HTTP POST completed");
                Ok(status)
            }
            Err(source) => {
                error!(url, error = %source, "HTTP POST failed");
                Err(HttpClientError::PostFailure {
                    url: url.to_string(),
                    source,
                })
            }
        }
    }

    /// Whether the node at `ip` answers its ping endpoint with 200.
    pub async fn ping_server(&self, ip: &str) -> bool {
        let url = format!("http://{}:{}{}", ip, self.config.server_port, PING_PATH);
        match self.get(&url, None).await {
            Ok(status) => status == 200,
            Err(e) => {
                warn!(ip, error = %e, "Server ping failed");
                false
            }
        }
    }
}

/// `a=1;b=2;`: every pair is terminated by `;`.
fn cookie_header(cookies: &BTreeMap<String, String>) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|(k, v)| format!("{}={};", k, v))
            .collect(),
    )
}
