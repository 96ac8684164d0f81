//! Monetary rounding.
//!
//! Rounding is applied exactly once, as the last step of the pipeline, to
//! avoid compounding rounding error across intermediate sums.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::ContributionResult;

/// Rounds a monetary amount to the nearest cent, half away from zero.
///
/// # Examples
///
/// ```
/// use cpf_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("299.885").unwrap();
/// assert_eq!(round_to_cents(amount), Decimal::from_str("299.89").unwrap());
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds every monetary field of a contribution result independently to
/// two decimal places.
///
/// Rounding is stable: rounding an already-rounded result is a no-op.
pub fn round_result(result: ContributionResult) -> ContributionResult {
    ContributionResult {
        employee_contribution: round_to_cents(result.employee_contribution),
        employer_contribution: round_to_cents(result.employer_contribution),
        total_contribution: round_to_cents(result.total_contribution),
        ordinary: round_to_cents(result.ordinary),
        special: round_to_cents(result.special),
        medisave: round_to_cents(result.medisave),
    }
}
