//! Federal income tax calculations.
//!
//! The calculator is a pure function over an [`crate::IncomeAggregate`]
//! and a filing status; it holds no state beyond a borrowed rate table
//! and performs no I/O.

pub mod common;
pub mod federal_income;

pub use federal_income::{FederalTaxCalculator, TaxCalculationError};
