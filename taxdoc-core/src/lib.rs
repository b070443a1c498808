pub mod calculations;
pub mod models;
pub mod rates;

pub use calculations::{FederalTaxCalculator, TaxCalculationError};
pub use models::*;
pub use rates::{RateTable, RateTableError, ScheduleRates};
