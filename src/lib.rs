//! CPF Contribution Calculation Engine
//!
//! This crate calculates mandatory CPF (Central Provident Fund) contributions
//! for Singapore payroll: resolving the applicable contribution rates by
//! employee classification and age band, capping wages against the statutory
//! ceilings, splitting contributions between employee and employer, allocating
//! the total across sub-accounts, and rounding to the nearest cent.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
