mod filing_status;
mod income;
mod tax_bracket;
mod tax_outcome;

pub use filing_status::{FilingStatus, RateSchedule};
pub use income::IncomeAggregate;
pub use tax_bracket::TaxBracket;
pub use tax_outcome::TaxOutcome;
