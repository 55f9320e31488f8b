//! Named GraphQL documents used by the client.
//!
//! Every operation the SDK performs is a static GraphQL document addressed by
//! an [`OperationType`] and a name, e.g. `query/customers` or
//! `mutation/createAssessment`. The client never builds query text itself; it
//! asks a [`TemplateResolver`] for the document and sends it verbatim.
//!
//! # Resolvers
//!
//! - [`EmbeddedTemplates`]: the documents shipped with the crate (default)
//! - [`InMemoryTemplates`]: documents registered at runtime
//! - [`FileSystemTemplates`]: documents read from `<root>/<type>/<name>.graphql`
//!
//! # Example
//!
//! ```rust
//! use relycomply::templates::{EmbeddedTemplates, OperationType, TemplateKey, TemplateResolver};
//!
//! let key = TemplateKey::new(OperationType::Query, "customers");
//! assert_eq!(key.to_string(), "query/customers");
//!
//! let text = EmbeddedTemplates.resolve(&key).unwrap();
//! assert!(text.contains("customers"));
//! ```

mod stores;

pub use stores::{EmbeddedTemplates, FileSystemTemplates, InMemoryTemplates};

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// The kind of GraphQL operation a template contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationType {
    /// A read-only `query` document.
    Query,
    /// A `mutation` document.
    Mutation,
}

impl OperationType {
    /// Returns the lowercase name used in template keys and directory names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lookup key of a template: `"<operation type>/<name>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateKey {
    operation_type: OperationType,
    name: String,
}

impl TemplateKey {
    /// Creates a key for the given operation type and name.
    #[must_use]
    pub fn new(operation_type: OperationType, name: impl Into<String>) -> Self {
        Self {
            operation_type,
            name: name.into(),
        }
    }

    /// Returns the operation type.
    #[must_use]
    pub const fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// Returns the operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.operation_type, self.name)
    }
}

/// Error returned when a resolver has no document for a key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No GraphQL template found for '{key}'")]
pub struct TemplateNotFoundError {
    /// The key that could not be resolved.
    pub key: TemplateKey,
}

impl TemplateNotFoundError {
    /// Creates a new error for the given key.
    #[must_use]
    pub fn new(key: &TemplateKey) -> Self {
        Self { key: key.clone() }
    }
}

/// Looks up GraphQL document text by [`TemplateKey`].
///
/// Implementations must be shareable across tasks; lookups are synchronous
/// and must not perform network I/O.
pub trait TemplateResolver: Send + Sync {
    /// Returns the document text for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateNotFoundError`] if no document exists for `key`.
    fn resolve(&self, key: &TemplateKey) -> Result<Cow<'_, str>, TemplateNotFoundError>;
}
