//! GraphQL client implementation for the RelyComply API.
//!
//! This module provides the [`GraphqlClient`] type, which resolves a named
//! GraphQL document, wraps it in a request envelope with its variables, and
//! sends it through the [`HttpClient`].

use serde::Serialize;
use serde_json::Value;

use crate::clients::graphql::GraphqlError;
use crate::clients::HttpClient;
use crate::config::RelyComplyConfig;
use crate::templates::{EmbeddedTemplates, OperationType, TemplateKey, TemplateResolver};

/// The JSON body of a GraphQL request.
///
/// Serializes to `{"query": "...", "variables": {...}}`; absent variables
/// serialize as `null` rather than being omitted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// The GraphQL document text.
    pub query: String,
    /// The variables for the document, if any.
    pub variables: Option<Value>,
}

/// Returns the `errors` array of a GraphQL response, if it is present and non-empty.
///
/// # Example
///
/// ```rust
/// use relycomply::clients::graphql::graphql_errors;
/// use serde_json::json;
///
/// let response = json!({ "data": null, "errors": [{ "message": "x" }] });
/// assert_eq!(graphql_errors(&response).map(<[_]>::len), Some(1));
///
/// assert!(graphql_errors(&json!({ "data": {} })).is_none());
/// ```
#[must_use]
pub fn graphql_errors(response: &Value) -> Option<&[Value]> {
    response
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())
        .map(Vec::as_slice)
}

/// GraphQL API client for the RelyComply API.
///
/// The client holds only immutable state: the HTTP transport and the
/// template resolver. Every call to [`execute`](Self::execute) sends exactly
/// one request and returns the response body unmodified, including any
/// GraphQL `errors`.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use relycomply::{ApiToken, RelyComplyConfig};
/// use relycomply::clients::GraphqlClient;
/// use relycomply::templates::OperationType;
/// use serde_json::json;
///
/// let config = RelyComplyConfig::new(ApiToken::new("my-token").unwrap());
/// let client = GraphqlClient::new(&config);
///
/// let response = client
///     .execute(OperationType::Query, "customers", Some(json!({ "id": "abc" })))
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient<R = EmbeddedTemplates> {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Source of GraphQL document text.
    templates: R,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient<EmbeddedTemplates> {
    /// Creates a new GraphQL client using the documents shipped with the SDK.
    ///
    /// This constructor is infallible and performs no network I/O.
    #[must_use]
    pub fn new(config: &RelyComplyConfig) -> Self {
        Self::with_templates(config, EmbeddedTemplates)
    }
}

impl<R: TemplateResolver> GraphqlClient<R> {
    /// Creates a new GraphQL client with a custom template resolver.
    ///
    /// # Example
    ///
    /// ```rust
    /// use relycomply::{ApiToken, RelyComplyConfig};
    /// use relycomply::clients::GraphqlClient;
    /// use relycomply::templates::FileSystemTemplates;
    ///
    /// let config = RelyComplyConfig::new(ApiToken::new("my-token").unwrap());
    /// let client = GraphqlClient::with_templates(&config, FileSystemTemplates::new("./graphql"));
    /// ```
    #[must_use]
    pub fn with_templates(config: &RelyComplyConfig, templates: R) -> Self {
        Self {
            http_client: HttpClient::new(config),
            templates,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the template resolver.
    #[must_use]
    pub const fn templates(&self) -> &R {
        &self.templates
    }

    /// Resolves the document text for an operation.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::TemplateNotFound`] if the resolver has no
    /// document for the operation.
    pub fn resolve(&self, operation_type: OperationType, name: &str) -> Result<String, GraphqlError> {
        let key = TemplateKey::new(operation_type, name);
        let text = self.templates.resolve(&key)?;
        Ok(text.into_owned())
    }

    /// Builds the request envelope for an operation without sending it.
    ///
    /// The result depends only on the template text and `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::TemplateNotFound`] if the resolver has no
    /// document for the operation.
    pub fn build_request(
        &self,
        operation_type: OperationType,
        name: &str,
        variables: Option<Value>,
    ) -> Result<GraphqlRequest, GraphqlError> {
        Ok(GraphqlRequest {
            query: self.resolve(operation_type, name)?,
            variables,
        })
    }

    /// Executes a named GraphQL operation against the API.
    ///
    /// # Arguments
    ///
    /// * `operation_type` - Whether the document is a query or a mutation
    /// * `name` - The operation name used to look up the document
    /// * `variables` - Optional variables for the document
    ///
    /// # Returns
    ///
    /// The JSON response body as-is. GraphQL-level errors are not treated as
    /// failures; use [`graphql_errors`] to inspect them.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::TemplateNotFound`] if no document exists (no request is sent)
    /// - [`GraphqlError::Transport`] for network failures, non-2xx responses,
    ///   and bodies that are not valid JSON
    pub async fn execute(
        &self,
        operation_type: OperationType,
        name: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let request = self.build_request(operation_type, name, variables)?;

        tracing::debug!("Executing GraphQL {} '{}'", operation_type, name);
        let response = self.http_client.post_json(&request).await?;

        if let Some(errors) = graphql_errors(&response.body) {
            tracing::debug!(
                "GraphQL {} '{}' returned {} error(s)",
                operation_type,
                name,
                errors.len()
            );
        }

        Ok(response.body)
    }
}
