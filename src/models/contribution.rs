//! Contribution result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a CPF contribution calculation.
///
/// Carries the employee/employer split, the combined total, and the
/// breakdown into the three statutory sub-accounts. After the final
/// rounding step every field holds at most 2 decimal places, and
/// `ordinary + special + medisave` equals `total_contribution` to within
/// one cent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionResult {
    /// The employee's share of the contribution.
    pub employee_contribution: Decimal,
    /// The employer's share of the contribution.
    pub employer_contribution: Decimal,
    /// The combined contribution (employee + employer).
    pub total_contribution: Decimal,
    /// The portion allocated to the Ordinary Account.
    pub ordinary: Decimal,
    /// The portion allocated to the Special Account.
    pub special: Decimal,
    /// The portion allocated to the Medisave Account.
    pub medisave: Decimal,
}

impl ContributionResult {
    /// Returns a result with every field zero.
    ///
    /// Used for wage categories with no contributable amount, e.g. when the
    /// annual additional wage ceiling has been exhausted.
    pub fn zero() -> Self {
        Self {
            employee_contribution: Decimal::ZERO,
            employer_contribution: Decimal::ZERO,
            total_contribution: Decimal::ZERO,
            ordinary: Decimal::ZERO,
            special: Decimal::ZERO,
            medisave: Decimal::ZERO,
        }
    }
}
