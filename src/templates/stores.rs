//! [`TemplateResolver`] implementations.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::templates::{OperationType, TemplateKey, TemplateNotFoundError, TemplateResolver};

/// Documents compiled into the crate from the `graphql/` directory.
const EMBEDDED: &[(OperationType, &str, &str)] = &[
    (
        OperationType::Query,
        "customers",
        include_str!("../../graphql/query/customers.graphql"),
    ),
    (
        OperationType::Query,
        "assessments",
        include_str!("../../graphql/query/assessments.graphql"),
    ),
    (
        OperationType::Mutation,
        "createCustomer",
        include_str!("../../graphql/mutation/createCustomer.graphql"),
    ),
    (
        OperationType::Mutation,
        "createAssessment",
        include_str!("../../graphql/mutation/createAssessment.graphql"),
    ),
    (
        OperationType::Mutation,
        "createAssessmentLink",
        include_str!("../../graphql/mutation/createAssessmentLink.graphql"),
    ),
    (
        OperationType::Mutation,
        "createDocument",
        include_str!("../../graphql/mutation/createDocument.graphql"),
    ),
];

/// The GraphQL documents shipped with the SDK.
///
/// This is the resolver used by [`GraphqlClient::new`](crate::clients::GraphqlClient::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Returns the keys of all embedded documents.
    pub fn keys() -> impl Iterator<Item = TemplateKey> {
        EMBEDDED
            .iter()
            .map(|(operation_type, name, _)| TemplateKey::new(*operation_type, *name))
    }
}

impl TemplateResolver for EmbeddedTemplates {
    fn resolve(&self, key: &TemplateKey) -> Result<Cow<'_, str>, TemplateNotFoundError> {
        EMBEDDED
            .iter()
            .find(|(operation_type, name, _)| {
                *operation_type == key.operation_type() && *name == key.name()
            })
            .map(|(_, _, text)| Cow::Borrowed(*text))
            .ok_or_else(|| TemplateNotFoundError::new(key))
    }
}

/// Documents registered at runtime.
///
/// # Example
///
/// ```rust
/// use relycomply::templates::{InMemoryTemplates, OperationType, TemplateKey, TemplateResolver};
///
/// let templates = InMemoryTemplates::new()
///     .with_template(OperationType::Query, "customers", "query { customers { edges { node { id } } } }");
///
/// let key = TemplateKey::new(OperationType::Query, "customers");
/// assert!(templates.resolve(&key).is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryTemplates {
    templates: HashMap<TemplateKey, String>,
}

impl InMemoryTemplates {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a document.
    #[must_use]
    pub fn with_template(
        mut self,
        operation_type: OperationType,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(operation_type, name, text);
        self
    }

    /// Adds (or replaces) a document in place.
    pub fn insert(
        &mut self,
        operation_type: OperationType,
        name: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.templates
            .insert(TemplateKey::new(operation_type, name), text.into());
    }

    /// Returns the number of registered documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if no documents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateResolver for InMemoryTemplates {
    fn resolve(&self, key: &TemplateKey) -> Result<Cow<'_, str>, TemplateNotFoundError> {
        self.templates
            .get(key)
            .map(|text| Cow::Borrowed(text.as_str()))
            .ok_or_else(|| TemplateNotFoundError::new(key))
    }
}

/// Documents read from disk at `<root>/<operation type>/<name>.graphql`.
///
/// Files are read on every lookup. Names containing path separators or `..`
/// never resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSystemTemplates {
    root: PathBuf,
}

impl FileSystemTemplates {
    /// Creates a resolver rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &TemplateKey) -> Option<PathBuf> {
        let name = key.name();
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        Some(
            self.root
                .join(key.operation_type().as_str())
                .join(format!("{name}.graphql")),
        )
    }
}

impl TemplateResolver for FileSystemTemplates {
    fn resolve(&self, key: &TemplateKey) -> Result<Cow<'_, str>, TemplateNotFoundError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| TemplateNotFoundError::new(key))?;

        std::fs::read_to_string(&path).map(Cow::Owned).map_err(|e| {
            tracing::debug!("Failed to read GraphQL template {}: {}", path.display(), e);
            TemplateNotFoundError::new(key)
        })
    }
}
