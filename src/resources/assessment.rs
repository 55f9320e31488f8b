//! Assessment and assessment link inputs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The assessment configuration used for every assessment this SDK creates.
pub const ONBOARDING_ASSESSMENT_CONFIG: &str = "onboarding_assessment";

/// An onboarding assessment to start with `createAssessment`.
///
/// When `webhook_url` is set, RelyComply posts the result there once the
/// assessment completes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    /// ID of the customer to assess.
    pub customer: String,
    #[serde(default)]
    pub webhook_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAssessmentInput<'a> {
    customer: &'a str,
    assessment_config: &'static str,
    webhook_url: Option<&'a str>,
}

impl NewAssessment {
    /// Creates an assessment input for a customer.
    #[must_use]
    pub fn new(customer: impl Into<String>, webhook_url: Option<String>) -> Self {
        Self {
            customer: customer.into(),
            webhook_url,
        }
    }

    /// Returns the `createAssessment` variables.
    ///
    /// A missing webhook URL is sent as `webhookUrl: null`.
    #[must_use]
    pub fn to_variables(&self) -> Value {
        let input = CreateAssessmentInput {
            customer: &self.customer,
            assessment_config: ONBOARDING_ASSESSMENT_CONFIG,
            webhook_url: self.webhook_url.as_deref(),
        };
        serde_json::json!({ "input": input })
    }
}

/// A directed link between two assessments, created with `createAssessmentLink`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessmentLink {
    pub primary_assessment: String,
    pub related_assessment: String,
    /// Role of the related assessment, e.g. `director`.
    pub role: String,
}

impl NewAssessmentLink {
    /// Creates a link input.
    #[must_use]
    pub fn new(
        primary_assessment: impl Into<String>,
        related_assessment: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            primary_assessment: primary_assessment.into(),
            related_assessment: related_assessment.into(),
            role: role.into(),
        }
    }

    /// Returns the `createAssessmentLink` variables.
    #[must_use]
    pub fn to_variables(&self) -> Value {
        serde_json::json!({ "input": self })
    }
}
