//! Federal income tax estimation from aggregated document figures.
//!
//! This module implements the simplified Form 1040 computation: gross
//! income from wages, nonemployee compensation, and interest income; the
//! standard deduction for the filing status; marginal tax over the
//! schedule's brackets; and the refund or amount owed against withholding.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxdoc_core::{FederalTaxCalculator, FilingStatus, IncomeAggregate, RateTable};
//!
//! let rates = RateTable::tax_year_2024();
//! let calculator = FederalTaxCalculator::new(&rates);
//!
//! let income = IncomeAggregate {
//!     total_wages: dec!(60000),
//!     total_nonemployee_compensation: dec!(0),
//!     total_interest_income: dec!(500),
//!     total_federal_income_tax_withheld: dec!(7000),
//! };
//!
//! let outcome = calculator.calculate(&income, FilingStatus::Single).unwrap();
//!
//! assert_eq!(outcome.taxable_income, dec!(45900));
//! assert_eq!(outcome.tax_liability, dec!(5276));
//! assert_eq!(outcome.refund_or_amount_owed, dec!(1724));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::max;
use crate::models::{FilingStatus, IncomeAggregate, TaxBracket, TaxOutcome};
use crate::rates::RateTable;

/// Errors that can occur during a federal tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxCalculationError {
    /// The injected rate table has no entry for the schedule this filing
    /// status resolves to.
    #[error("no rates configured for filing status '{}'", .0.as_str())]
    UnknownFilingStatus(FilingStatus),
}

/// Calculator for the simplified federal income tax estimate.
///
/// Pure and stateless: it borrows an immutable [`RateTable`] and may be
/// called concurrently from any number of threads.
///
/// All monetary inputs are assumed non-negative. That precondition is
/// owned by the aggregation step that builds the [`IncomeAggregate`]; the
/// calculator does not re-validate it.
#[derive(Debug, Clone)]
pub struct FederalTaxCalculator<'a> {
    rates: &'a RateTable,
}

impl<'a> FederalTaxCalculator<'a> {
    /// Creates a calculator backed by the given rate table.
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Computes the full tax outcome for one filing.
    ///
    /// Every intermediate figure is returned in the [`TaxOutcome`] at full
    /// decimal precision; rounding is left to presentation.
    ///
    /// # Errors
    ///
    /// Returns [`TaxCalculationError::UnknownFilingStatus`] if the rate
    /// table lacks the schedule for `filing_status`.
    pub fn calculate(
        &self,
        income: &IncomeAggregate,
        filing_status: FilingStatus,
    ) -> Result<TaxOutcome, TaxCalculationError> {
        let schedule = filing_status.rate_schedule();

        let deduction = self
            .rates
            .deduction_for(schedule)
            .map_err(|_| TaxCalculationError::UnknownFilingStatus(filing_status))?;
        let brackets = self
            .rates
            .brackets_for(schedule)
            .map_err(|_| TaxCalculationError::UnknownFilingStatus(filing_status))?;

        let gross_income = self.gross_income(income);
        let taxable_income = self.taxable_income(gross_income, deduction);
        let tax_liability = self.bracket_tax(taxable_income, brackets);
        let refund_or_amount_owed = income.total_federal_income_tax_withheld - tax_liability;

        Ok(TaxOutcome {
            filing_status,
            gross_income,
            deduction,
            taxable_income,
            tax_liability,
            total_federal_income_tax_withheld: income.total_federal_income_tax_withheld,
            refund_or_amount_owed,
        })
    }

    /// Sums the three recognized income sources. Withholding is a payment,
    /// not income, and is excluded.
    fn gross_income(&self, income: &IncomeAggregate) -> Decimal {
        income.total_wages + income.total_nonemployee_compensation + income.total_interest_income
    }

    /// Gross income minus the deduction, floored at zero.
    fn taxable_income(
        &self,
        gross_income: Decimal,
        deduction: Decimal,
    ) -> Decimal {
        max(gross_income - deduction, Decimal::ZERO)
    }

    /// Marginal-rate walk over the ordered bracket list.
    ///
    /// Each bracket taxes only the slice of income that falls within it;
    /// brackets above the taxable income are never visited. The top
    /// bracket is unbounded and absorbs whatever remains.
    fn bracket_tax(
        &self,
        taxable_income: Decimal,
        brackets: &[TaxBracket],
    ) -> Decimal {
        let mut remaining = taxable_income;
        let mut liability = Decimal::ZERO;

        for bracket in brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            if taxable_income <= bracket.min_income {
                break;
            }

            let amount_in_bracket = match bracket.max_income {
                Some(max_income) => remaining.min(max_income - bracket.min_income),
                None => remaining,
            };
            liability += amount_in_bracket * bracket.tax_rate;
            remaining -= amount_in_bracket;
        }

        liability
    }
}
