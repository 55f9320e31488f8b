//! The typed RelyComply API client.
//!
//! [`RelyComplyClient`] exposes one method per supported business operation.
//! Each method only shapes the `variables` object and delegates to
//! [`GraphqlClient::execute`].

use serde_json::Value;

use crate::clients::graphql::{GraphqlClient, GraphqlError};
use crate::config::RelyComplyConfig;
use crate::resources::{
    id_variables, NewAssessment, NewAssessmentLink, NewCustomer, NewDocument, NewOrganization,
};
use crate::templates::{EmbeddedTemplates, OperationType, TemplateResolver};

/// Template name shared by the customer list and single-customer lookups.
pub const CUSTOMERS_QUERY: &str = "customers";
/// Template name shared by the assessment list and single-assessment lookups.
pub const ASSESSMENTS_QUERY: &str = "assessments";
/// Template name for customer and organization creation.
pub const CREATE_CUSTOMER_MUTATION: &str = "createCustomer";
/// Template name for starting an assessment.
pub const CREATE_ASSESSMENT_MUTATION: &str = "createAssessment";
/// Template name for issuing an assessment link.
pub const CREATE_ASSESSMENT_LINK_MUTATION: &str = "createAssessmentLink";
/// Template name for attaching a document to a customer.
pub const CREATE_DOCUMENT_MUTATION: &str = "createDocument";

/// Client for the RelyComply compliance API.
///
/// All methods return the raw GraphQL response, including any `errors`
/// array; see [`graphql_errors`](crate::clients::graphql::graphql_errors).
/// Create operations are not idempotent: calling one twice sends two
/// mutations, so use unique `identifier` values where the API supports them.
///
/// The list and single-item lookups for customers (and for assessments)
/// share one document; the remote query branches on the presence of `id`.
///
/// # Thread Safety
///
/// `RelyComplyClient` is `Send + Sync` and can be shared across tasks,
/// for example behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use relycomply::{ApiToken, NewAssessment, RelyComplyClient, RelyComplyConfig};
///
/// let config = RelyComplyConfig::new(ApiToken::new("my-token")?);
/// let client = RelyComplyClient::new(&config);
///
/// let customer = client.get_customer("Q3VzdG9tZXI6MQ==").await?;
/// let assessment = client
///     .create_assessment(&NewAssessment::new("Q3VzdG9tZXI6MQ==", None))
///     .await?;
/// ```
#[derive(Debug)]
pub struct RelyComplyClient<R = EmbeddedTemplates> {
    graphql: GraphqlClient<R>,
}

// Verify RelyComplyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelyComplyClient>();
};

impl RelyComplyClient<EmbeddedTemplates> {
    /// Creates a client using the documents shipped with the SDK.
    ///
    /// No network I/O happens here.
    #[must_use]
    pub fn new(config: &RelyComplyConfig) -> Self {
        Self::from_graphql(GraphqlClient::new(config))
    }
}

impl<R: TemplateResolver> RelyComplyClient<R> {
    /// Creates a client with a custom template resolver.
    #[must_use]
    pub fn with_templates(config: &RelyComplyConfig, templates: R) -> Self {
        Self::from_graphql(GraphqlClient::with_templates(config, templates))
    }

    /// Wraps an existing [`GraphqlClient`].
    #[must_use]
    pub const fn from_graphql(graphql: GraphqlClient<R>) -> Self {
        Self { graphql }
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient<R> {
        &self.graphql
    }

    /// Executes any named operation; see [`GraphqlClient::execute`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn execute(
        &self,
        operation_type: OperationType,
        name: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        self.graphql.execute(operation_type, name, variables).await
    }

    /// Lists customers.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn list_customers(&self) -> Result<Value, GraphqlError> {
        self.execute(OperationType::Query, CUSTOMERS_QUERY, None)
            .await
    }

    /// Fetches a single customer by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn get_customer(&self, id: &str) -> Result<Value, GraphqlError> {
        self.execute(OperationType::Query, CUSTOMERS_QUERY, Some(id_variables(id)))
            .await
    }

    /// Creates a natural-person customer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Value, GraphqlError> {
        self.execute(
            OperationType::Mutation,
            CREATE_CUSTOMER_MUTATION,
            Some(customer.to_variables()),
        )
        .await
    }

    /// Creates an organization customer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<Value, GraphqlError> {
        self.execute(
            OperationType::Mutation,
            CREATE_CUSTOMER_MUTATION,
            Some(organization.to_variables()),
        )
        .await
    }

    /// Lists assessments.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn list_assessments(&self) -> Result<Value, GraphqlError> {
        self.execute(OperationType::Query, ASSESSMENTS_QUERY, None)
            .await
    }

    /// Fetches a single assessment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn get_assessment(&self, id: &str) -> Result<Value, GraphqlError> {
        self.execute(OperationType::Query, ASSESSMENTS_QUERY, Some(id_variables(id)))
            .await
    }

    /// Starts an onboarding assessment for a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn create_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> Result<Value, GraphqlError> {
        self.execute(
            OperationType::Mutation,
            CREATE_ASSESSMENT_MUTATION,
            Some(assessment.to_variables()),
        )
        .await
    }

    /// Links a related assessment to a primary one.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn create_assessment_link(
        &self,
        link: &NewAssessmentLink,
    ) -> Result<Value, GraphqlError> {
        self.execute(
            OperationType::Mutation,
            CREATE_ASSESSMENT_LINK_MUTATION,
            Some(link.to_variables()),
        )
        .await
    }

    /// Attaches a document to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the template is missing or the request fails.
    pub async fn create_document(&self, document: &NewDocument) -> Result<Value, GraphqlError> {
        self.execute(
            OperationType::Mutation,
            CREATE_DOCUMENT_MUTATION,
            Some(document.to_variables()),
        )
        .await
    }
}
