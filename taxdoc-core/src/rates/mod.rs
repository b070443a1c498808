//! Static rate reference data: standard deductions and marginal bracket
//! schedules for one tax year.
//!
//! A [`RateTable`] is built once at startup and never mutated. Moving to a
//! new tax year means constructing a whole new table, never patching
//! entries in a live one. Tests inject small hand-built tables the same
//! way production injects the shipped [`RateTable::tax_year_2024`] table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{RateSchedule, TaxBracket};

/// Errors raised by rate table lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateTableError {
    /// The table has no entry for the requested schedule. Cannot happen
    /// with the shipped yearly tables, which cover all four schedules.
    #[error("no rates configured for schedule {}", .0.as_str())]
    UnknownFilingStatus(RateSchedule),
}

/// Deduction and brackets for a single rate schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRates {
    pub standard_deduction: Decimal,
    pub brackets: Vec<TaxBracket>,
}

/// Immutable per-year rate reference data, keyed by [`RateSchedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    tax_year: i32,
    schedules: HashMap<RateSchedule, ScheduleRates>,
}

impl RateTable {
    /// Builds a table from explicit per-schedule entries.
    pub fn new(
        tax_year: i32,
        schedules: impl IntoIterator<Item = (RateSchedule, ScheduleRates)>,
    ) -> Self {
        Self {
            tax_year,
            schedules: schedules.into_iter().collect(),
        }
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    /// The standard deduction for a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`RateTableError::UnknownFilingStatus`] if the table has no
    /// entry for `schedule`.
    pub fn deduction_for(&self, schedule: RateSchedule) -> Result<Decimal, RateTableError> {
        self.schedules
            .get(&schedule)
            .map(|rates| rates.standard_deduction)
            .ok_or(RateTableError::UnknownFilingStatus(schedule))
    }

    /// The ordered bracket list for a schedule, lowest bracket first.
    ///
    /// # Errors
    ///
    /// Returns [`RateTableError::UnknownFilingStatus`] if the table has no
    /// entry for `schedule`.
    pub fn brackets_for(&self, schedule: RateSchedule) -> Result<&[TaxBracket], RateTableError> {
        self.schedules
            .get(&schedule)
            .map(|rates| rates.brackets.as_slice())
            .ok_or(RateTableError::UnknownFilingStatus(schedule))
    }

    /// The 2024 federal rate table (Rev. Proc. 2023-34 amounts).
    pub fn tax_year_2024() -> Self {
        Self::new(
            2024,
            [
                (
                    RateSchedule::X,
                    ScheduleRates {
                        standard_deduction: dec!(14600),
                        brackets: brackets(&[
                            (dec!(0), Some(dec!(11600)), dec!(0.10)),
                            (dec!(11600), Some(dec!(47150)), dec!(0.12)),
                            (dec!(47150), Some(dec!(100525)), dec!(0.22)),
                            (dec!(100525), Some(dec!(191950)), dec!(0.24)),
                            (dec!(191950), Some(dec!(243725)), dec!(0.32)),
                            (dec!(243725), Some(dec!(609350)), dec!(0.35)),
                            (dec!(609350), None, dec!(0.37)),
                        ]),
                    },
                ),
                (
                    RateSchedule::Y1,
                    ScheduleRates {
                        standard_deduction: dec!(29200),
                        brackets: brackets(&[
                            (dec!(0), Some(dec!(23200)), dec!(0.10)),
                            (dec!(23200), Some(dec!(94300)), dec!(0.12)),
                            (dec!(94300), Some(dec!(201050)), dec!(0.22)),
                            (dec!(201050), Some(dec!(383900)), dec!(0.24)),
                            (dec!(383900), Some(dec!(487450)), dec!(0.32)),
                            (dec!(487450), Some(dec!(731200)), dec!(0.35)),
                            (dec!(731200), None, dec!(0.37)),
                        ]),
                    },
                ),
                (
                    RateSchedule::Y2,
                    ScheduleRates {
                        standard_deduction: dec!(14600),
                        brackets: brackets(&[
                            (dec!(0), Some(dec!(11600)), dec!(0.10)),
                            (dec!(11600), Some(dec!(47150)), dec!(0.12)),
                            (dec!(47150), Some(dec!(100525)), dec!(0.22)),
                            (dec!(100525), Some(dec!(191950)), dec!(0.24)),
                            (dec!(191950), Some(dec!(243725)), dec!(0.32)),
                            (dec!(243725), Some(dec!(365600)), dec!(0.35)),
                            (dec!(365600), None, dec!(0.37)),
                        ]),
                    },
                ),
                (
                    RateSchedule::Z,
                    ScheduleRates {
                        standard_deduction: dec!(21900),
                        brackets: brackets(&[
                            (dec!(0), Some(dec!(16550)), dec!(0.10)),
                            (dec!(16550), Some(dec!(63100)), dec!(0.12)),
                            (dec!(63100), Some(dec!(100500)), dec!(0.22)),
                            (dec!(100500), Some(dec!(191950)), dec!(0.24)),
                            (dec!(191950), Some(dec!(243700)), dec!(0.32)),
                            (dec!(243700), Some(dec!(609350)), dec!(0.35)),
                            (dec!(609350), None, dec!(0.37)),
                        ]),
                    },
                ),
            ],
        )
    }
}

fn brackets(rows: &[(Decimal, Option<Decimal>, Decimal)]) -> Vec<TaxBracket> {
    rows.iter()
        .map(|&(min_income, max_income, tax_rate)| TaxBracket {
            min_income,
            max_income,
            tax_rate,
        })
        .collect()
}
