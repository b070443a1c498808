use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tax document as returned by the extraction service.
///
/// The serde attributes pin the service's JSON schema: a `"type"` tag of
/// `"W2"`, `"1099-NEC"`, or `"1099-INT"`, with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtractedDocument {
    #[serde(rename = "W2", rename_all = "camelCase")]
    W2 {
        employer_name: String,
        employee_name: String,
        wages: Decimal,
        federal_income_tax_withheld: Decimal,
    },
    #[serde(rename = "1099-NEC", rename_all = "camelCase")]
    Nec1099 {
        payer_name: String,
        recipient_name: String,
        nonemployee_compensation: Decimal,
    },
    #[serde(rename = "1099-INT", rename_all = "camelCase")]
    Int1099 {
        payer_name: String,
        recipient_name: String,
        interest_income: Decimal,
    },
}

impl ExtractedDocument {
    /// The document's form designation, for logging and display.
    pub fn form_name(&self) -> &'static str {
        match self {
            Self::W2 { .. } => "W-2",
            Self::Nec1099 { .. } => "1099-NEC",
            Self::Int1099 { .. } => "1099-INT",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn w2_deserializes_from_service_schema() {
        let json = r#"{
            "type": "W2",
            "employerName": "Acme Corp",
            "employeeName": "Jane Doe",
            "wages": 60000,
            "federalIncomeTaxWithheld": 7000
        }"#;

        let document: ExtractedDocument = serde_json::from_str(json).unwrap();

        assert_eq!(
            document,
            ExtractedDocument::W2 {
                employer_name: "Acme Corp".to_string(),
                employee_name: "Jane Doe".to_string(),
                wages: dec!(60000),
                federal_income_tax_withheld: dec!(7000),
            }
        );
    }

    #[test]
    fn nec_1099_deserializes_from_service_schema() {
        let json = r#"{
            "type": "1099-NEC",
            "payerName": "Client LLC",
            "recipientName": "Jane Doe",
            "nonemployeeCompensation": 12000.50
        }"#;

        let document: ExtractedDocument = serde_json::from_str(json).unwrap();

        assert_eq!(document.form_name(), "1099-NEC");
        assert_eq!(
            document,
            ExtractedDocument::Nec1099 {
                payer_name: "Client LLC".to_string(),
                recipient_name: "Jane Doe".to_string(),
                nonemployee_compensation: dec!(12000.50),
            }
        );
    }

    #[test]
    fn int_1099_serializes_with_type_tag() {
        let document = ExtractedDocument::Int1099 {
            payer_name: "First Bank".to_string(),
            recipient_name: "Jane Doe".to_string(),
            interest_income: dec!(500),
        };

        let json = serde_json::to_value(&document).unwrap();

        assert_eq!(json["type"], "1099-INT");
        assert_eq!(json["payerName"], "First Bank");
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let json = r#"{"type": "1098-T", "payerName": "U"}"#;

        let result: Result<ExtractedDocument, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
