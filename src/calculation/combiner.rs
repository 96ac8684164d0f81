//! Combining per-wage-category contributions.

use crate::models::ContributionResult;

/// Combines the ordinary-wage and additional-wage contributions into one
/// result by field-wise addition.
///
/// The sub-account fields are still zero at this stage: allocation runs
/// once, on the combined total, to avoid compounding rounding error across
/// intermediate sums.
pub fn combine(
    ordinary: &ContributionResult,
    additional: &ContributionResult,
) -> ContributionResult {
    ContributionResult {
        employee_contribution: ordinary.employee_contribution + additional.employee_contribution,
        employer_contribution: ordinary.employer_contribution + additional.employer_contribution,
        total_contribution: ordinary.total_contribution + additional.total_contribution,
        ordinary: ordinary.ordinary + additional.ordinary,
        special: ordinary.special + additional.special,
        medisave: ordinary.medisave + additional.medisave,
    }
}
