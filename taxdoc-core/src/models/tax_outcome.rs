use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Full result of one federal tax calculation.
///
/// Every intermediate figure is echoed back so the caller can populate a
/// summary view or form line by line; nothing here is rounded, that is
/// left to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxOutcome {
    pub filing_status: FilingStatus,
    pub gross_income: Decimal,
    pub deduction: Decimal,
    pub taxable_income: Decimal,
    pub tax_liability: Decimal,
    pub total_federal_income_tax_withheld: Decimal,
    /// Positive: refund due to the taxpayer. Negative: amount owed.
    pub refund_or_amount_owed: Decimal,
}
