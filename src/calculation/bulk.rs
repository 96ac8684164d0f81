//! Bulk contribution runner.
//!
//! Drives the single-employee pipeline over a batch of employees for a
//! payroll period. One employee's failure is recorded against that
//! employee's id and never aborts the batch; the report is always a
//! partial-success shape.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionResult, PayrollInput, PayrollPeriod};

use super::pipeline::calculate_contribution;

/// The outcome of one employee's calculation within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmployeeOutcome {
    /// The calculation succeeded.
    Success {
        /// The calculated contribution.
        contribution: ContributionResult,
    },
    /// The calculation failed; the error is recorded, not propagated.
    Failed {
        /// The stable machine-readable error code.
        code: String,
        /// The human-readable error message.
        message: String,
    },
}

/// The report produced by a bulk run: per-employee outcomes keyed by
/// employee id, plus summary counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// The payroll period the batch covered.
    pub period: PayrollPeriod,
    /// The number of employees processed.
    pub processed: usize,
    /// The number of successful calculations.
    pub succeeded: usize,
    /// The number of failed calculations.
    pub failed: usize,
    /// Per-employee outcomes, keyed by employee id.
    pub results: HashMap<String, EmployeeOutcome>,
}

/// Runs the contribution pipeline for a batch of employees.
///
/// Each employee is calculated independently against the same rate
/// snapshot, with the first day of the payroll period as the as-of date.
/// Per-employee errors are converted into [`EmployeeOutcome::Failed`]
/// entries rather than propagated, so the batch always completes.
///
/// # Arguments
///
/// * `period` - The payroll period being processed
/// * `employees` - The payroll inputs, one per employee
/// * `config` - The engine configuration
///
/// # Returns
///
/// Returns the [`BatchReport`], or `InvalidPayrollData` if the period
/// itself does not denote a valid calendar month or the batch contains
/// duplicate employee ids. Outcomes are keyed by employee id, so a
/// duplicate would silently overwrite another employee's entry; the
/// batch is rejected whole instead.
pub fn run_batch(
    period: PayrollPeriod,
    employees: &[PayrollInput],
    config: &EngineConfig,
) -> EngineResult<BatchReport> {
    let as_of = period
        .first_day()
        .ok_or_else(|| EngineError::InvalidPayrollData {
            field: "payroll_period".to_string(),
            message: format!("month {} is not a valid calendar month", period.month),
        })?;

    let mut seen = HashSet::with_capacity(employees.len());
    for input in employees {
        if !seen.insert(input.employee_id.as_str()) {
            return Err(EngineError::InvalidPayrollData {
                field: "employee_id".to_string(),
                message: format!(
                    "duplicate employee_id '{}' in batch",
                    input.employee_id
                ),
            });
        }
    }

    let mut results = HashMap::with_capacity(employees.len());
    let mut succeeded = 0;
    let mut failed = 0;

    for input in employees {
        match calculate_contribution(input, as_of, config) {
            Ok(contribution) => {
                succeeded += 1;
                results.insert(
                    input.employee_id.clone(),
                    EmployeeOutcome::Success { contribution },
                );
            }
            Err(err) => {
                warn!(
                    employee_id = %input.employee_id,
                    error = %err,
                    "Contribution calculation failed for employee"
                );
                failed += 1;
                results.insert(
                    input.employee_id.clone(),
                    EmployeeOutcome::Failed {
                        code: err.code().to_string(),
                        message: err.to_string(),
                    },
                );
            }
        }
    }

    Ok(BatchReport {
        period,
        processed: employees.len(),
        succeeded,
        failed,
        results,
    })
}
