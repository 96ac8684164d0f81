//! Wage capping and payroll input validation.
//!
//! This module applies the monthly ordinary wage ceiling and the cumulative
//! annual additional wage ceiling, and validates payroll inputs before any
//! arithmetic runs.

use rust_decimal::Decimal;

use crate::config::CpfLimits;
use crate::error::{EngineError, EngineResult};
use crate::models::PayrollInput;

/// Validates a payroll input against the statutory limits.
///
/// # Arguments
///
/// * `input` - The payroll input to validate
/// * `limits` - The statutory wage limits
///
/// # Returns
///
/// Returns `Ok(())` for valid inputs, or `InvalidPayrollData` if:
/// - any wage field is negative
/// - the basic salary is below the minimum wage threshold (no contribution
///   is due at all; the whole calculation fails rather than silently
///   producing zeros)
/// - year-to-date ordinary wages exceed the theoretical annual ceiling of
///   12 x the monthly ceiling, which signals upstream data corruption
pub fn validate_payroll(input: &PayrollInput, limits: &CpfLimits) -> EngineResult<()> {
    let wage_fields = [
        ("basic_salary", input.basic_salary),
        ("additional_wages", input.additional_wages),
        ("ytd_ordinary_wages", input.ytd_ordinary_wages),
        ("ytd_additional_wages", input.ytd_additional_wages),
    ];
    for (field, value) in wage_fields {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidPayrollData {
                field: field.to_string(),
                message: format!("wage amount {} must not be negative", value),
            });
        }
    }

    if input.basic_salary < limits.minimum_wage_threshold {
        return Err(EngineError::InvalidPayrollData {
            field: "basic_salary".to_string(),
            message: format!(
                "below minimum threshold of ${}",
                limits.minimum_wage_threshold
            ),
        });
    }

    if input.ytd_ordinary_wages > limits.annual_ordinary_ceiling() {
        return Err(EngineError::InvalidPayrollData {
            field: "ytd_ordinary_wages".to_string(),
            message: format!(
                "year-to-date ordinary wages exceed annual ceiling of ${}",
                limits.annual_ordinary_ceiling()
            ),
        });
    }

    Ok(())
}

/// Caps the monthly ordinary wage at the statutory ceiling.
///
/// Capping is idempotent: capping an already-capped wage returns the same
/// value.
pub fn cap_ordinary_wage(basic_salary: Decimal, limits: &CpfLimits) -> Decimal {
    basic_salary.min(limits.ordinary_wage_ceiling)
}

/// Returns the remaining annual additional wage ceiling headroom.
///
/// Computed as `max(0, annual ceiling - ytd ordinary - ytd additional)`.
pub fn remaining_additional_wage_ceiling(
    ytd_ordinary: Decimal,
    ytd_additional: Decimal,
    limits: &CpfLimits,
) -> Decimal {
    (limits.additional_wage_ceiling - ytd_ordinary - ytd_additional).max(Decimal::ZERO)
}

/// Caps the additional wage against the remaining annual ceiling headroom.
///
/// If the ceiling is already exhausted the contributable additional wage is
/// zero for this cycle. That is the expected terminal state once the annual
/// ceiling is used up, not an error.
pub fn cap_additional_wage(
    additional_wages: Decimal,
    ytd_ordinary: Decimal,
    ytd_additional: Decimal,
    limits: &CpfLimits,
) -> Decimal {
    let headroom = remaining_additional_wage_ceiling(ytd_ordinary, ytd_additional, limits);
    additional_wages.min(headroom)
}
