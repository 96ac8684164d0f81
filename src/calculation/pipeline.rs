//! The single-employee contribution pipeline.
//!
//! Runs the full calculation for one payroll input: validation, age band
//! derivation, rate resolution, wage capping, splitting, combining,
//! account allocation, and final rounding. The pipeline is a pure,
//! synchronous function of its inputs and the engine configuration.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AgeBand, ContributionResult, PayrollInput};

use super::allocation::allocate_accounts;
use super::combiner::combine;
use super::rate_resolver::resolve_rate;
use super::rounding::round_result;
use super::splitter::split_contribution;
use super::wage_cap::{cap_additional_wage, cap_ordinary_wage, validate_payroll};

/// Calculates the CPF contribution for one employee.
///
/// # Arguments
///
/// * `input` - The employee's payroll input for this cycle
/// * `as_of` - The calculation date used for rate resolution
/// * `config` - The engine configuration (limits, allocations, rates)
///
/// # Returns
///
/// Returns the rounded [`ContributionResult`], or:
/// - `InvalidPayrollData` for negative wages, a below-threshold salary,
///   inconsistent year-to-date figures, or an age below 16
/// - `RateNotFound` if no rate record applies on `as_of`
/// - `AllocationNotFound` if the allocation table has no entry for the
///   employee's age band
///
/// All errors propagate unmodified; nothing is downgraded to a default.
///
/// # Example
///
/// ```no_run
/// use cpf_engine::calculation::calculate_contribution;
/// use cpf_engine::config::ConfigLoader;
/// use cpf_engine::models::{EmployeeType, PayrollInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/cpf").unwrap();
/// let input = PayrollInput {
///     employee_id: "emp_1001".to_string(),
///     classification: EmployeeType::Citizen,
///     age: 30,
///     basic_salary: Decimal::from(5000),
///     additional_wages: Decimal::ZERO,
///     ytd_ordinary_wages: Decimal::from(35000),
///     ytd_additional_wages: Decimal::ZERO,
/// };
/// let as_of = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let result = calculate_contribution(&input, as_of, loader.config()).unwrap();
/// println!("Total contribution: ${}", result.total_contribution);
/// ```
pub fn calculate_contribution(
    input: &PayrollInput,
    as_of: NaiveDate,
    config: &EngineConfig,
) -> EngineResult<ContributionResult> {
    validate_payroll(input, config.limits())?;

    let age_band = AgeBand::from_age(input.age).ok_or_else(|| EngineError::InvalidPayrollData {
        field: "age".to_string(),
        message: format!("age {} is below the minimum CPF age of 16", input.age),
    })?;

    // The rate tier is determined by the ordinary monthly salary; the same
    // record is reused for additional wages below.
    let rate = resolve_rate(input.classification, age_band, as_of, config.rates())?;

    let capped_ordinary = cap_ordinary_wage(input.basic_salary, config.limits());
    let ordinary_contribution = split_contribution(capped_ordinary, rate);

    let capped_additional = cap_additional_wage(
        input.additional_wages,
        input.ytd_ordinary_wages,
        input.ytd_additional_wages,
        config.limits(),
    );
    let additional_contribution = split_contribution(capped_additional, rate);

    let combined = combine(&ordinary_contribution, &additional_contribution);
    let allocated = allocate_accounts(combined, age_band, config.allocations())?;

    Ok(round_result(allocated))
}
