//! Calculation logic for the CPF Contribution Engine.
//!
//! This module contains the calculation functions for determining CPF
//! contributions: rate resolution by classification and age band, wage
//! capping against the monthly and annual ceilings, contribution splitting
//! between employee and employer, combining per-wage-category contributions,
//! account allocation by age band, cent rounding, the single-employee
//! pipeline, and the bulk batch runner.

mod allocation;
mod bulk;
mod combiner;
mod pipeline;
mod rate_resolver;
mod rounding;
mod splitter;
mod wage_cap;

pub use allocation::allocate_accounts;
pub use bulk::{BatchReport, EmployeeOutcome, run_batch};
pub use combiner::combine;
pub use pipeline::calculate_contribution;
pub use rate_resolver::resolve_rate;
pub use rounding::{round_result, round_to_cents};
pub use splitter::split_contribution;
pub use wage_cap::{
    cap_additional_wage, cap_ordinary_wage, remaining_additional_wage_ceiling, validate_payroll,
};
