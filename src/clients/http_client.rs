//! HTTP transport for RelyComply API communication.
//!
//! This module provides the [`HttpClient`] type, which POSTs JSON bodies to
//! the configured GraphQL endpoint with the SDK's authentication headers.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::RelyComplyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the RelyComply API.
///
/// The client handles:
/// - Default headers including User-Agent and the bearer token
/// - Gzip response decoding (`Accept-Encoding: gzip`)
/// - Mapping of non-2xx responses and unparseable bodies to [`HttpError`]
///
/// Each call to [`post_json`](Self::post_json) issues exactly one request;
/// there is no retry logic.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// The `Debug` output masks the `Authorization` header.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "*****")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("endpoint", &self.endpoint)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// No network I/O happens here.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use relycomply::{ApiToken, RelyComplyConfig};
    /// use relycomply::clients::HttpClient;
    ///
    /// let config = RelyComplyConfig::new(ApiToken::new("my-token").unwrap());
    /// let client = HttpClient::new(&config);
    ///
    /// assert_eq!(client.endpoint(), "https://app.relycomply.com/graphql/");
    /// ```
    #[must_use]
    pub fn new(config: &RelyComplyConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}RelyComply Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), config.api_token().bearer());

        let mut builder = reqwest::Client::builder().use_rustls_tls().gzip(true);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    ///
    /// `Accept-Encoding: gzip` is added by the transport and is not listed here.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs `body` as JSON to the endpoint and parses the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network, connection, or timeout error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx response body is not valid JSON (`InvalidJson`)
    pub async fn post_json<T>(&self, body: &T) -> Result<HttpResponse, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let mut req_builder = self.client.post(&self.endpoint).json(body);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!("Sending POST request to {}", self.endpoint);
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        tracing::debug!("Received response with status {}", code);

        if !(200..=299).contains(&code) {
            // Error bodies are parsed leniently; they only feed the error message.
            let body = serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }));
            let response = HttpResponse::new(code, res_headers, body);
            tracing::warn!(
                "RelyComply API request to {} failed with status {}",
                self.endpoint,
                code
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: Self::serialize_error(&response),
                error_reference: response.request_id().map(String::from),
            }));
        }

        let body = serde_json::from_str(&body_text).map_err(|e| HttpError::InvalidJson {
            code,
            message: e.to_string(),
        })?;

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
