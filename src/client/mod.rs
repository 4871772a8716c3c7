//! Request dispatcher
//!
//! One reusable HTTP client per run. Every call prints its trace to stdout and
//! comes back as an [`ApiResponse`]; transport failures are folded into the
//! response instead of being returned as errors, so a dead backend never
//! stops the scenario.

mod method;
mod response;
pub mod trace;

pub use method::Method;
pub use response::{decode_body, ApiResponse};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::common::{Error, Result};

/// HTTP client bound to the API's base address
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`
    ///
    /// The address must be an absolute http(s) URL; a trailing slash is dropped
    /// so paths can be appended verbatim.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed =
            reqwest::Url::parse(trimmed).map_err(|e| Error::invalid_base_url(base_url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(
                base_url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let http = reqwest::Client::builder().build().map_err(Error::HttpClient)?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    /// Base address requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request with a verb given as text
    ///
    /// Fails with [`Error::UnsupportedMethod`] before touching the network
    /// when the verb is not GET, POST, PUT or DELETE.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        let method: Method = method.parse()?;
        Ok(self.request(method, path, body, token).await)
    }

    /// Send a request and print its trace
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ApiResponse {
        self.execute(method, path, &[], body, token).await
    }

    /// Send a request with query parameters
    ///
    /// Parameters are percent-encoded on the wire; the trace shows them as given.
    pub async fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ApiResponse {
        self.execute(method, path, query, body, token).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
        token: Option<&str>,
    ) -> ApiResponse {
        let url = self.url_for(path);
        let shown = display_path(path, query);
        tracing::debug!(%method, %url, authenticated = token.is_some(), "Sending request");

        let mut builder = self
            .http
            .request(method.into(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            builder = builder.query(query);
        }

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        if method.carries_body() {
            if let Some(body) = body {
                builder = builder.json(body);
            }
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return report_transport_failure(method, &shown, &e),
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return report_transport_failure(method, &shown, &e),
        };

        let (data, parsed) = decode_body(&text);
        let raw = if parsed { None } else { Some(text.as_str()) };
        println!("{}", trace::format_exchange(method, &shown, status, &data, raw));

        let result = ApiResponse::answered(status, data);
        if !result.success {
            tracing::warn!(%method, path = %shown, status, "Request answered with non-success status");
        }
        result
    }
}

/// Path plus unencoded query, as printed in the trace
fn display_path(path: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", path, pairs.join("&"))
}

fn report_transport_failure(method: Method, path: &str, error: &reqwest::Error) -> ApiResponse {
    let message = error.to_string();
    println!("{}", trace::format_transport_error(method, path, &message));
    tracing::debug!(%method, path, error = ?error, "Transport failure");
    ApiResponse::transport_failure(message)
}
