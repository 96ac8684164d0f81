//! Payroll input and payroll period models.
//!
//! This module contains the [`PayrollInput`] consumed by a single-employee
//! calculation and the [`PayrollPeriod`] that anchors a bulk run in time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeType;

/// The per-calculation payroll input for one employee.
///
/// This struct is transient: it exists only for the duration of one
/// contribution calculation. All wage fields are monthly or year-to-date
/// dollar amounts and must be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's residency classification.
    pub classification: EmployeeType,
    /// The employee's age in whole years.
    pub age: u32,
    /// The monthly ordinary wage (basic salary).
    pub basic_salary: Decimal,
    /// Additional (non-regular) wages for this cycle, e.g. bonuses.
    pub additional_wages: Decimal,
    /// Year-to-date ordinary wages already subjected to contribution.
    pub ytd_ordinary_wages: Decimal,
    /// Year-to-date additional wages already subjected to contribution.
    pub ytd_additional_wages: Decimal,
}

/// A payroll period identifying the month a bulk run covers.
///
/// The first day of the period is used as the as-of date for rate
/// resolution, so every employee in a batch is calculated against the same
/// rate snapshot.
///
/// # Example
///
/// ```
/// use cpf_engine::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod { year: 2026, month: 8 };
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2026, 8, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// The calendar year of the period.
    pub year: i32,
    /// The calendar month of the period (1-12).
    pub month: u32,
}

impl PayrollPeriod {
    /// Returns the first day of the period, or `None` if the month is
    /// out of range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}
