//! Document input.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document to attach to a customer with `createDocument`.
///
/// `data` is passed through untouched; use [`NewDocument::from_bytes`] to
/// send raw file contents as base64.
///
/// # Example
///
/// ```rust
/// use relycomply::NewDocument;
///
/// let document = NewDocument::from_bytes("cust-1", "proof_of_address", b"%PDF-1.7");
/// assert_eq!(document.data, "JVBERi0xLjc=");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    /// ID of the customer the document belongs to.
    pub customer: String,
    pub document_type: String,
    pub data: String,
}

impl NewDocument {
    /// Creates a document input with an already-encoded payload.
    #[must_use]
    pub fn new(
        customer: impl Into<String>,
        document_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            customer: customer.into(),
            document_type: document_type.into(),
            data: data.into(),
        }
    }

    /// Creates a document input from raw bytes, encoded as standard base64.
    #[must_use]
    pub fn from_bytes(
        customer: impl Into<String>,
        document_type: impl Into<String>,
        bytes: impl AsRef<[u8]>,
    ) -> Self {
        Self::new(customer, document_type, STANDARD.encode(bytes))
    }

    /// Returns the `createDocument` variables.
    #[must_use]
    pub fn to_variables(&self) -> Value {
        serde_json::json!({ "input": self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_variables_shape() {
        let document = NewDocument::new("cust-1", "passport", "aGVsbG8=");

        assert_eq!(
            document.to_variables(),
            json!({
                "input": {
                    "customer": "cust-1",
                    "documentType": "passport",
                    "data": "aGVsbG8="
                }
            })
        );
    }

    #[test]
    fn test_from_bytes_encodes_standard_base64() {
        let document = NewDocument::from_bytes("cust-1", "passport", [0xfb_u8, 0xff, 0x00]);
        assert_eq!(document.data, "+/8A");

        let empty = NewDocument::from_bytes("cust-1", "passport", b"");
        assert_eq!(empty.data, "");
    }
}
