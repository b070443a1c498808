use taxdoc_core::IncomeAggregate;

use crate::document::ExtractedDocument;

/// Sums extracted documents into the income totals the calculator takes.
///
/// W-2s contribute wages and federal withholding, 1099-NECs nonemployee
/// compensation, 1099-INTs interest income. Documents that failed
/// extraction never reach this function.
pub fn aggregate_documents(documents: &[ExtractedDocument]) -> IncomeAggregate {
    let mut totals = IncomeAggregate::default();

    for document in documents {
        match document {
            ExtractedDocument::W2 {
                wages,
                federal_income_tax_withheld,
                ..
            } => {
                totals.total_wages += *wages;
                totals.total_federal_income_tax_withheld += *federal_income_tax_withheld;
            }
            ExtractedDocument::Nec1099 {
                nonemployee_compensation,
                ..
            } => {
                totals.total_nonemployee_compensation += *nonemployee_compensation;
            }
            ExtractedDocument::Int1099 {
                interest_income, ..
            } => {
                totals.total_interest_income += *interest_income;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn w2(wages: &str, withheld: &str) -> ExtractedDocument {
        ExtractedDocument::W2 {
            employer_name: "Acme Corp".to_string(),
            employee_name: "Jane Doe".to_string(),
            wages: wages.parse().unwrap(),
            federal_income_tax_withheld: withheld.parse().unwrap(),
        }
    }

    #[test]
    fn empty_batch_aggregates_to_zero_totals() {
        let totals = aggregate_documents(&[]);

        assert_eq!(totals, IncomeAggregate::default());
    }

    #[test]
    fn mixed_batch_sums_by_document_type() {
        let documents = vec![
            w2("42000", "5000"),
            w2("18000", "2000"),
            ExtractedDocument::Nec1099 {
                payer_name: "Client LLC".to_string(),
                recipient_name: "Jane Doe".to_string(),
                nonemployee_compensation: dec!(12000),
            },
            ExtractedDocument::Int1099 {
                payer_name: "First Bank".to_string(),
                recipient_name: "Jane Doe".to_string(),
                interest_income: dec!(500),
            },
            ExtractedDocument::Int1099 {
                payer_name: "Second Bank".to_string(),
                recipient_name: "Jane Doe".to_string(),
                interest_income: dec!(250.25),
            },
        ];

        let totals = aggregate_documents(&documents);

        assert_eq!(totals.total_wages, dec!(60000));
        assert_eq!(totals.total_federal_income_tax_withheld, dec!(7000));
        assert_eq!(totals.total_nonemployee_compensation, dec!(12000));
        assert_eq!(totals.total_interest_income, dec!(750.25));
    }

    #[test]
    fn only_w2s_contribute_withholding() {
        let documents = vec![ExtractedDocument::Nec1099 {
            payer_name: "Client LLC".to_string(),
            recipient_name: "Jane Doe".to_string(),
            nonemployee_compensation: dec!(12000),
        }];

        let totals = aggregate_documents(&documents);

        assert_eq!(totals.total_federal_income_tax_withheld, dec!(0));
    }
}
