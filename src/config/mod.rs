//! Configuration types for the RelyComply SDK.
//!
//! # Overview
//!
//! - [`RelyComplyConfig`]: The immutable configuration held by a client
//! - [`RelyComplyConfigBuilder`]: A builder for constructing [`RelyComplyConfig`] instances
//! - [`ApiToken`]: A validated bearer token with masked debug output
//! - [`Endpoint`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use relycomply::{ApiToken, Endpoint, RelyComplyConfig};
//!
//! let config = RelyComplyConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .endpoint(Endpoint::new("https://staging.example.com/graphql/").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, Endpoint, DEFAULT_ENDPOINT};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the RelyComply SDK.
///
/// Holds the credential and transport settings captured when a client is
/// constructed. Nothing here changes after construction.
///
/// # Thread Safety
///
/// `RelyComplyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct RelyComplyConfig {
    api_token: ApiToken,
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl RelyComplyConfig {
    /// Creates a configuration for the production endpoint with the given token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use relycomply::{ApiToken, RelyComplyConfig, DEFAULT_ENDPOINT};
    ///
    /// let config = RelyComplyConfig::new(ApiToken::new("my-token").unwrap());
    /// assert_eq!(config.endpoint().as_ref(), DEFAULT_ENDPOINT);
    /// ```
    #[must_use]
    pub fn new(api_token: ApiToken) -> Self {
        Self {
            api_token,
            endpoint: Endpoint::default(),
            user_agent_prefix: None,
            timeout: None,
        }
    }

    /// Creates a new builder for constructing a `RelyComplyConfig`.
    #[must_use]
    pub fn builder() -> RelyComplyConfigBuilder {
        RelyComplyConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify RelyComplyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelyComplyConfig>();
};

/// Builder for constructing [`RelyComplyConfig`] instances.
///
/// The only required field is `api_token`.
///
/// # Defaults
///
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport default applies)
#[derive(Debug, Default)]
pub struct RelyComplyConfigBuilder {
    api_token: Option<ApiToken>,
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl RelyComplyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`RelyComplyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set.
    pub fn build(self) -> Result<RelyComplyConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(RelyComplyConfig {
            api_token,
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
