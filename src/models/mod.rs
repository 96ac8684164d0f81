//! Core data models for the CPF Contribution Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contribution;
mod employee;
mod payroll;
mod rate;

pub use contribution::ContributionResult;
pub use employee::{AgeBand, EmployeeType};
pub use payroll::{PayrollInput, PayrollPeriod};
pub use rate::RateRecord;
