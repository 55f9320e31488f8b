//! Customer and organization inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Customer `type` sent for organizations.
pub const ORGANISATION_CUSTOMER_TYPE: &str = "organisation";

/// `idDocumentType` sent for organizations.
pub const ENTITY_REGISTRATION_DOCUMENT_TYPE: &str = "entity_registration";

/// Attribute key for a customer's address.
pub const ADDRESS_KEY: &str = "address";

/// Attribute key for a customer's phone number.
pub const PHONE_NUMBER_KEY: &str = "phone_number";

/// A natural person to register with `createCustomer`.
///
/// Deserializes from the camelCase field names used by the API
/// (`firstName`, `idDocumentCode`, `phoneNumber`, ...).
///
/// `birthdate` is a calendar date and is always sent as `YYYY-MM-DD`;
/// other date formats are rejected when deserializing.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use relycomply::NewCustomer;
///
/// let customer = NewCustomer {
///     identifier: "cust-001".to_string(),
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     id_document_type: "passport".to_string(),
///     id_document_code: "A1234567".to_string(),
///     nationality: "ZA".to_string(),
///     residence: "ZA".to_string(),
///     birthdate: NaiveDate::from_ymd_opt(1990, 1, 31).unwrap(),
///     address: "123 Main St".to_string(),
///     phone_number: "+1-555-0100".to_string(),
/// };
///
/// let variables = customer.to_variables();
/// assert_eq!(variables["input"]["birthdate"], "1990-01-31");
/// assert_eq!(variables["input"]["data"][0]["key"], "address");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Caller-chosen unique identifier; reusing it guards against duplicates.
    pub identifier: String,
    pub first_name: String,
    pub last_name: String,
    pub id_document_type: String,
    pub id_document_code: String,
    /// Country of nationality.
    pub nationality: String,
    /// Country of residence.
    pub residence: String,
    pub birthdate: NaiveDate,
    pub address: String,
    pub phone_number: String,
}

/// A key-value customer attribute as sent in `input.data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct CustomerAttribute<'a> {
    key: &'static str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCustomerInput<'a> {
    identifier: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    id_document_type: &'a str,
    id_document_code: &'a str,
    nationality: &'a str,
    residence: &'a str,
    birthdate: NaiveDate,
    data: [CustomerAttribute<'a>; 2],
}

impl NewCustomer {
    /// Returns the `createCustomer` variables for this customer.
    ///
    /// The address and phone number are sent, in that order, as the
    /// attribute list `input.data`.
    #[must_use]
    pub fn to_variables(&self) -> Value {
        let input = CreateCustomerInput {
            identifier: &self.identifier,
            first_name: &self.first_name,
            last_name: &self.last_name,
            id_document_type: &self.id_document_type,
            id_document_code: &self.id_document_code,
            nationality: &self.nationality,
            residence: &self.residence,
            birthdate: self.birthdate,
            data: [
                CustomerAttribute {
                    key: ADDRESS_KEY,
                    value: &self.address,
                },
                CustomerAttribute {
                    key: PHONE_NUMBER_KEY,
                    value: &self.phone_number,
                },
            ],
        };
        serde_json::json!({ "input": input })
    }
}

/// A legal entity to register with `createCustomer`.
///
/// Organizations are always sent with `type: "organisation"` and
/// `idDocumentType: "entity_registration"`. As with [`NewCustomer`], the
/// date of incorporation is sent as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    /// Caller-chosen unique identifier; reusing it guards against duplicates.
    pub identifier: String,
    pub business_name: String,
    /// Registration number of the entity.
    pub id_document_code: String,
    /// Country of incorporation.
    pub nationality: String,
    /// Country of operation.
    pub residence: String,
    /// Date of incorporation.
    pub birthdate: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrganizationInput<'a> {
    identifier: &'a str,
    #[serde(rename = "type")]
    customer_type: &'static str,
    business_name: &'a str,
    id_document_type: &'static str,
    id_document_code: &'a str,
    nationality: &'a str,
    residence: &'a str,
    birthdate: NaiveDate,
}

impl NewOrganization {
    /// Returns the `createCustomer` variables for this organization.
    #[must_use]
    pub fn to_variables(&self) -> Value {
        let input = CreateOrganizationInput {
            identifier: &self.identifier,
            customer_type: ORGANISATION_CUSTOMER_TYPE,
            business_name: &self.business_name,
            id_document_type: ENTITY_REGISTRATION_DOCUMENT_TYPE,
            id_document_code: &self.id_document_code,
            nationality: &self.nationality,
            residence: &self.residence,
            birthdate: self.birthdate,
        };
        serde_json::json!({ "input": input })
    }
}
