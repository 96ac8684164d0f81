//! Contribution splitting between employee and employer.

use rust_decimal::Decimal;

use crate::models::{ContributionResult, RateRecord};

/// Splits a capped wage into employee and employer contributions.
///
/// Pure multiplication: each party contributes `capped_wage x rate / 100`.
/// The sub-account fields of the returned result are zero; allocation
/// happens later, after the per-category contributions are combined.
///
/// The rate record must be the one resolved from the employee's *ordinary*
/// monthly salary. Additional wages use the same rate tier; the engine never
/// re-resolves a rate from the additional wage amount.
///
/// # Arguments
///
/// * `capped_wage` - The contributable wage after ceiling capping
/// * `rate` - The resolved rate record
pub fn split_contribution(capped_wage: Decimal, rate: &RateRecord) -> ContributionResult {
    let employee_contribution = capped_wage * rate.employee_rate_percent / Decimal::ONE_HUNDRED;
    let employer_contribution = capped_wage * rate.employer_rate_percent / Decimal::ONE_HUNDRED;

    ContributionResult {
        employee_contribution,
        employer_contribution,
        total_contribution: employee_contribution + employer_contribution,
        ..ContributionResult::zero()
    }
}
