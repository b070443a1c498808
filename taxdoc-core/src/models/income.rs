use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income figures summed across all successfully extracted documents.
///
/// Each field is the total of the matching box across zero or more
/// documents of that type: wages and withholding from W-2s, nonemployee
/// compensation from 1099-NECs, interest income from 1099-INTs.
///
/// All fields are expected to be non-negative; enforcing that is the
/// aggregating caller's responsibility, not the calculator's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeAggregate {
    pub total_wages: Decimal,
    pub total_nonemployee_compensation: Decimal,
    pub total_interest_income: Decimal,
    pub total_federal_income_tax_withheld: Decimal,
}
