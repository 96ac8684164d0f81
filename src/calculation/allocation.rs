//! Account allocation by age band.
//!
//! This module splits the combined contribution total into the three
//! statutory sub-accounts using the age-banded allocation ratio table.

use std::collections::HashMap;

use crate::config::AllocationRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AgeBand, ContributionResult};

/// Allocates the combined contribution total across the three sub-accounts.
///
/// Looks up the Special and Medisave ratios for the age band and computes:
///
/// ```text
/// medisave = total x medisave_ratio
/// special  = total x special_ratio
/// ordinary = total - special - medisave
/// ```
///
/// The Ordinary Account share is always the remainder, never computed from
/// an explicit ratio, so the three shares sum exactly to the total before
/// rounding.
///
/// # Arguments
///
/// * `result` - The combined, pre-allocation contribution result
/// * `age_band` - The employee's age band
/// * `allocations` - The allocation ratio table
///
/// # Returns
///
/// Returns the result with its sub-account fields filled in, or
/// `AllocationNotFound` if the table has no entry for the band. A missing
/// entry is a configuration defect and is never defaulted to zero ratios.
pub fn allocate_accounts(
    result: ContributionResult,
    age_band: AgeBand,
    allocations: &HashMap<AgeBand, AllocationRates>,
) -> EngineResult<ContributionResult> {
    let ratios = allocations
        .get(&age_band)
        .ok_or(EngineError::AllocationNotFound { age_band })?;

    let total = result.total_contribution;
    let medisave = total * ratios.medisave;
    let special = total * ratios.special;
    let ordinary = total - special - medisave;

    Ok(ContributionResult {
        ordinary,
        special,
        medisave,
        ..result
    })
}
