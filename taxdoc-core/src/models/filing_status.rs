use serde::{Deserialize, Serialize};

/// Filing status as entered by the taxpayer on the personal information form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
    QualifyingWidow,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "married-filing-jointly",
            Self::MarriedFilingSeparately => "married-filing-separately",
            Self::HeadOfHousehold => "head-of-household",
            Self::QualifyingWidow => "qualifying-widow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married-filing-jointly" => Some(Self::MarriedFilingJointly),
            "married-filing-separately" => Some(Self::MarriedFilingSeparately),
            "head-of-household" => Some(Self::HeadOfHousehold),
            "qualifying-widow" => Some(Self::QualifyingWidow),
            _ => None,
        }
    }

    /// Resolves this filing status to its IRS rate schedule.
    ///
    /// The mapping is total: every status resolves to exactly one schedule.
    /// `QualifyingWidow` uses the married-filing-jointly schedule (Y-1),
    /// the same rates a qualifying surviving spouse receives on Form 1040.
    pub fn rate_schedule(&self) -> RateSchedule {
        match self {
            Self::Single => RateSchedule::X,
            Self::MarriedFilingJointly => RateSchedule::Y1,
            Self::MarriedFilingSeparately => RateSchedule::Y2,
            Self::HeadOfHousehold => RateSchedule::Z,
            Self::QualifyingWidow => RateSchedule::Y1,
        }
    }
}

/// IRS rate schedule designation, the key for deduction and bracket lookups.
///
/// - Schedule X → Single
/// - Schedule Y-1 → Married Filing Jointly (and Qualifying Widow(er))
/// - Schedule Y-2 → Married Filing Separately
/// - Schedule Z → Head of Household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateSchedule {
    X,
    Y1,
    Y2,
    Z,
}

impl RateSchedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y1 => "Y-1",
            Self::Y2 => "Y-2",
            Self::Z => "Z",
        }
    }
}
