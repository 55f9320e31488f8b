//! HTTP and GraphQL client types for RelyComply API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP transport with authentication headers
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpError`]: Transport failures
//! - [`graphql::GraphqlClient`]: Named-operation GraphQL client
//! - [`graphql::GraphqlError`]: GraphQL-specific error type
//!
//! # Example
//!
//! ```rust,ignore
//! use relycomply::{ApiToken, RelyComplyConfig};
//! use relycomply::clients::HttpClient;
//! use serde_json::json;
//!
//! let config = RelyComplyConfig::new(ApiToken::new("my-token").unwrap());
//! let client = HttpClient::new(&config);
//!
//! let response = client
//!     .post_json(&json!({ "query": "query { customers { edges { node { id } } } }", "variables": null }))
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call sends exactly one request and every failure is
//! returned to the caller.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlRequest};
