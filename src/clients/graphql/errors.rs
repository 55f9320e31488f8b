//! GraphQL-specific error types for the RelyComply SDK.
//!
//! Only two failures are exposed: a missing template, detected before any
//! network I/O, and a transport failure. GraphQL-level errors (a populated
//! `errors` array in a well-formed response) are returned as part of the
//! successful result, and it is the caller's responsibility to inspect them.
//!
//! # Example
//!
//! ```rust,ignore
//! use relycomply::clients::graphql::{graphql_errors, GraphqlError};
//!
//! match client.list_customers().await {
//!     Ok(response) => {
//!         if let Some(errors) = graphql_errors(&response) {
//!             println!("GraphQL errors: {errors:?}");
//!         } else {
//!             println!("Data: {}", response["data"]);
//!         }
//!     }
//!     Err(GraphqlError::TemplateNotFound { key }) => println!("No template {key}"),
//!     Err(GraphqlError::Transport(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::templates::{TemplateKey, TemplateNotFoundError};
use thiserror::Error;

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// No GraphQL document exists for the requested operation.
    ///
    /// Raised before any request is sent.
    #[error("No GraphQL template found for '{key}'")]
    TemplateNotFound {
        /// The key that could not be resolved.
        key: TemplateKey,
    },

    /// The request failed at the transport level.
    ///
    /// Covers network errors, timeouts, non-2xx responses, and response
    /// bodies that are not valid JSON.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl From<TemplateNotFoundError> for GraphqlError {
    fn from(error: TemplateNotFoundError) -> Self {
        Self::TemplateNotFound { key: error.key }
    }
}
