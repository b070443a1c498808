use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use taxdoc_core::{
    FederalTaxCalculator, FilingStatus, IncomeAggregate, RateTable, TaxCalculationError, TaxOutcome,
};

use crate::aggregate::aggregate_documents;
use crate::extract::{DocumentExtractor, ExtractError};

/// Errors from the end-to-end estimate pipeline.
///
/// The variants keep extraction failures distinguishable from calculation
/// failures so callers can report which stage broke rather than a single
/// opaque "tax calculation failed".
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("document extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("tax calculation failed: {0}")]
    Calculation(#[from] TaxCalculationError),
}

/// Everything a caller needs to display or file the estimate: the
/// per-source income totals alongside the computed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub totals: IncomeAggregate,
    pub outcome: TaxOutcome,
}

/// Runs extracted documents through aggregation and the tax calculator.
///
/// One instance serves any number of filings; it owns no per-filing
/// state. Extraction runs one document at a time; a batch is one
/// taxpayer's uploads, rarely more than a handful of documents.
pub struct EstimatePipeline<'a> {
    extractor: &'a dyn DocumentExtractor,
    rates: &'a RateTable,
}

impl<'a> EstimatePipeline<'a> {
    pub fn new(
        extractor: &'a dyn DocumentExtractor,
        rates: &'a RateTable,
    ) -> Self {
        Self { extractor, rates }
    }

    /// Extracts each document, aggregates the figures, and computes the
    /// full tax outcome.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Extract`] if any document fails
    /// extraction (that document's figures would otherwise silently go
    /// missing from the totals), or [`PipelineError::Calculation`] if the
    /// filing status cannot be resolved against the rate table.
    pub async fn run(
        &self,
        document_texts: &[String],
        filing_status: FilingStatus,
    ) -> Result<EstimateReport, PipelineError> {
        let mut documents = Vec::with_capacity(document_texts.len());
        for text in document_texts {
            let document = self.extractor.extract(text).await?;
            info!(form = document.form_name(), "extracted document");
            documents.push(document);
        }

        let totals = aggregate_documents(&documents);
        debug!(
            wages = %totals.total_wages,
            nonemployee_compensation = %totals.total_nonemployee_compensation,
            interest = %totals.total_interest_income,
            withheld = %totals.total_federal_income_tax_withheld,
            "aggregated income figures"
        );

        let calculator = FederalTaxCalculator::new(self.rates);
        let outcome = calculator.calculate(&totals, filing_status)?;
        info!(
            taxable_income = %outcome.taxable_income,
            tax_liability = %outcome.tax_liability,
            refund_or_amount_owed = %outcome.refund_or_amount_owed,
            "calculated federal estimate"
        );

        Ok(EstimateReport { totals, outcome })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::document::ExtractedDocument;
    use crate::extract::FixtureExtractor;

    use super::*;

    /// Extractor that rejects everything, for error-path tests.
    struct FailingExtractor;

    #[async_trait]
    impl DocumentExtractor for FailingExtractor {
        async fn extract(&self, _document_text: &str) -> Result<ExtractedDocument, ExtractError> {
            Err(ExtractError::UnsupportedDocument)
        }
    }

    fn w2_fixture() -> String {
        r#"{
            "type": "W2",
            "employerName": "Acme Corp",
            "employeeName": "Jane Doe",
            "wages": 60000,
            "federalIncomeTaxWithheld": 7000
        }"#
        .to_string()
    }

    fn int_fixture() -> String {
        r#"{
            "type": "1099-INT",
            "payerName": "First Bank",
            "recipientName": "Jane Doe",
            "interestIncome": 500
        }"#
        .to_string()
    }

    #[tokio::test]
    async fn run_extracts_aggregates_and_calculates() {
        let rates = RateTable::tax_year_2024();
        let extractor = FixtureExtractor;
        let pipeline = EstimatePipeline::new(&extractor, &rates);
        let texts = vec![w2_fixture(), int_fixture()];

        let report = pipeline.run(&texts, FilingStatus::Single).await.unwrap();

        assert_eq!(report.totals.total_wages, dec!(60000));
        assert_eq!(report.totals.total_interest_income, dec!(500));
        assert_eq!(report.outcome.gross_income, dec!(60500));
        assert_eq!(report.outcome.taxable_income, dec!(45900));
        assert_eq!(report.outcome.tax_liability, dec!(5276));
        assert_eq!(report.outcome.refund_or_amount_owed, dec!(1724));
    }

    #[tokio::test]
    async fn run_with_no_documents_yields_zero_figures() {
        let rates = RateTable::tax_year_2024();
        let extractor = FixtureExtractor;
        let pipeline = EstimatePipeline::new(&extractor, &rates);

        let report = pipeline.run(&[], FilingStatus::Single).await.unwrap();

        assert_eq!(report.totals, IncomeAggregate::default());
        assert_eq!(report.outcome.gross_income, dec!(0));
        assert_eq!(report.outcome.tax_liability, dec!(0));
    }

    #[tokio::test]
    async fn extraction_failure_is_distinguishable() {
        let rates = RateTable::tax_year_2024();
        let extractor = FailingExtractor;
        let pipeline = EstimatePipeline::new(&extractor, &rates);
        let texts = vec![w2_fixture()];

        let result = pipeline.run(&texts, FilingStatus::Single).await;

        assert!(matches!(
            result,
            Err(PipelineError::Extract(ExtractError::UnsupportedDocument))
        ));
    }
}
