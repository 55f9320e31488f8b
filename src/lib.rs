//! # RelyComply Rust SDK
//!
//! A client for the RelyComply GraphQL compliance API: customers,
//! organizations, assessments, assessment links, and documents.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Immutable configuration via [`RelyComplyConfig`] and [`RelyComplyConfigBuilder`]
//! - Validated newtypes for the API token and endpoint
//! - Named GraphQL documents behind the [`templates::TemplateResolver`] trait
//! - A generic [`GraphqlClient`] that executes a named operation with variables
//! - A typed [`RelyComplyClient`] with one method per business operation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relycomply::{ApiToken, NewAssessment, RelyComplyClient, RelyComplyConfig};
//! use relycomply::clients::graphql::graphql_errors;
//!
//! let config = RelyComplyConfig::new(ApiToken::new("your-api-token")?);
//! let client = RelyComplyClient::new(&config);
//!
//! let response = client
//!     .create_assessment(&NewAssessment::new("Q3VzdG9tZXI6MQ==", None))
//!     .await?;
//!
//! // GraphQL-level errors come back inside a successful response
//! if let Some(errors) = graphql_errors(&response) {
//!     eprintln!("RelyComply rejected the assessment: {errors:?}");
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use relycomply::{ApiToken, Endpoint, RelyComplyConfig};
//!
//! let config = RelyComplyConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .endpoint(Endpoint::new("https://staging.example.com/graphql/").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<serde_json::Value, GraphqlError>`:
//!
//! - [`GraphqlError::TemplateNotFound`]: no document for the operation; nothing was sent
//! - [`GraphqlError::Transport`]: network failure, non-2xx status, or a non-JSON body
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **One request per call**: No retries, caching, or pagination

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod templates;

// Re-export public types at crate root for convenience
pub use client::RelyComplyClient;
pub use config::{ApiToken, Endpoint, RelyComplyConfig, RelyComplyConfigBuilder, DEFAULT_ENDPOINT};
pub use error::ConfigError;

pub use clients::{
    GraphqlClient, GraphqlError, GraphqlRequest, HttpClient, HttpError, HttpResponse,
    HttpResponseError,
};
pub use resources::{NewAssessment, NewAssessmentLink, NewCustomer, NewDocument, NewOrganization};
pub use templates::{OperationType, TemplateKey, TemplateNotFoundError};
