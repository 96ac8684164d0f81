//! Configuration loading and management for the CPF Contribution Engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: statutory wage limits, account allocation ratios, and
//! contribution rate records.
//!
//! # Example
//!
//! ```no_run
//! use cpf_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/cpf").unwrap();
//! println!("Rate records loaded: {}", loader.config().rates().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllocationRates, AllocationsConfig, CpfLimits, EngineConfig, RateScheduleEntry,
    RateScheduleFile,
};
