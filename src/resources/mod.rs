//! Typed inputs for the RelyComply operations.
//!
//! Each input knows how to shape itself into the `variables` object of its
//! GraphQL mutation via `to_variables()`. The entities themselves live in
//! RelyComply; nothing here is cached or tracked by the SDK.
//!
//! | Input | Operation |
//! |---|---|
//! | [`NewCustomer`] | `mutation/createCustomer` |
//! | [`NewOrganization`] | `mutation/createCustomer` |
//! | [`NewAssessment`] | `mutation/createAssessment` |
//! | [`NewAssessmentLink`] | `mutation/createAssessmentLink` |
//! | [`NewDocument`] | `mutation/createDocument` |

mod assessment;
mod customer;
mod document;

pub use assessment::{NewAssessment, NewAssessmentLink, ONBOARDING_ASSESSMENT_CONFIG};
pub use customer::{
    NewCustomer, NewOrganization, ADDRESS_KEY, ENTITY_REGISTRATION_DOCUMENT_TYPE,
    ORGANISATION_CUSTOMER_TYPE, PHONE_NUMBER_KEY,
};
pub use document::NewDocument;

use serde_json::Value;

/// Returns the variables for a single-item lookup: `{ "id": id }`.
#[must_use]
pub fn id_variables(id: &str) -> Value {
    serde_json::json!({ "id": id })
}
