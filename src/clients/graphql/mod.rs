//! GraphQL layer of the RelyComply SDK.
//!
//! This module provides the generic [`GraphqlClient`] that sits between the
//! typed [`RelyComplyClient`](crate::RelyComplyClient) and the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`GraphqlClient`]: resolves named documents and executes them
//! - [`GraphqlRequest`]: the `{query, variables}` envelope sent as the request body
//! - [`GraphqlError`]: template and transport failures
//! - [`graphql_errors`]: extracts GraphQL-level errors from a response
//!
//! # Response Structure
//!
//! Responses are returned exactly as the API sent them:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (still HTTP 200)

mod client;
mod errors;

pub use client::{graphql_errors, GraphqlClient, GraphqlRequest};
pub use errors::GraphqlError;
