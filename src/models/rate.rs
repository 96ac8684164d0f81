//! Contribution rate record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgeBand, EmployeeType};

/// An immutable CPF contribution rate record.
///
/// Rate records are reference data maintained by an external process; the
/// engine only reads the latest record whose `effective_date` is on or
/// before the calculation date for a given (classification, age band) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// The employee classification this rate applies to.
    pub classification: EmployeeType,
    /// The age band this rate applies to.
    pub age_band: AgeBand,
    /// Employee contribution rate as a percentage (0-100).
    pub employee_rate_percent: Decimal,
    /// Employer contribution rate as a percentage (0-100).
    pub employer_rate_percent: Decimal,
    /// The date from which this rate is effective.
    pub effective_date: NaiveDate,
    /// The wage floor below which this rate does not apply.
    pub wage_floor: Decimal,
    /// The wage ceiling published with this rate record.
    pub wage_ceiling: Decimal,
}
