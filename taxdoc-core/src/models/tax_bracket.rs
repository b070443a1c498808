use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal tax bracket.
///
/// Brackets for a schedule form a contiguous ascending partition of
/// `[0, ∞)`: the first bracket's `min_income` is zero, each bracket's
/// `max_income` equals the next bracket's `min_income`, and the top
/// bracket's `max_income` is `None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}
