//! Configuration types for the CPF Contribution Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{AgeBand, EmployeeType, RateRecord};

/// Statutory wage limits applied by the wage capper.
///
/// These are the fixed ceilings and thresholds of the scheme, loaded from
/// `limits.yaml` and passed explicitly into every calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct CpfLimits {
    /// The monthly ordinary wage ceiling.
    pub ordinary_wage_ceiling: Decimal,
    /// The cumulative annual additional wage ceiling.
    pub additional_wage_ceiling: Decimal,
    /// The minimum monthly wage below which no contribution is due.
    pub minimum_wage_threshold: Decimal,
}

impl CpfLimits {
    /// The theoretical annual ordinary wage ceiling (12 x monthly ceiling).
    ///
    /// Year-to-date ordinary wages above this signal upstream data
    /// corruption and are rejected, not capped.
    pub fn annual_ordinary_ceiling(&self) -> Decimal {
        self.ordinary_wage_ceiling * Decimal::from(12)
    }
}

/// Account allocation ratios for one age band.
///
/// Only the Special and Medisave ratios are stored; the Ordinary Account
/// share is always the remainder `1 - special - medisave`, never an
/// explicit ratio.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AllocationRates {
    /// Fraction of the total contribution allocated to the Special Account.
    pub special: Decimal,
    /// Fraction of the total contribution allocated to the Medisave Account.
    pub medisave: Decimal,
}

/// Allocations configuration file structure (`allocations.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationsConfig {
    /// Map of age band to allocation ratios.
    pub allocations: HashMap<AgeBand, AllocationRates>,
}

/// A rate record as stored in a rate schedule file, without the effective
/// date (which is stamped from the file header).
#[derive(Debug, Clone, Deserialize)]
pub struct RateScheduleEntry {
    /// The employee classification this rate applies to.
    pub classification: EmployeeType,
    /// The age band this rate applies to.
    pub age_band: AgeBand,
    /// Employee contribution rate as a percentage (0-100).
    pub employee_rate_percent: Decimal,
    /// Employer contribution rate as a percentage (0-100).
    pub employer_rate_percent: Decimal,
    /// The wage floor below which this rate does not apply.
    pub wage_floor: Decimal,
    /// The wage ceiling published with this rate record.
    pub wage_ceiling: Decimal,
}

/// A rate schedule file (`rates/<date>.yaml`): one effective date and the
/// rate records that take effect on it.
#[derive(Debug, Clone, Deserialize)]
pub struct RateScheduleFile {
    /// The date from which the records in this file are effective.
    pub effective_date: NaiveDate,
    /// The rate records taking effect on that date.
    pub records: Vec<RateScheduleEntry>,
}

impl RateScheduleFile {
    /// Flattens this schedule into standalone rate records, stamping each
    /// with the file's effective date.
    pub fn into_records(self) -> Vec<RateRecord> {
        let effective_date = self.effective_date;
        self.records
            .into_iter()
            .map(|entry| RateRecord {
                classification: entry.classification,
                age_band: entry.age_band,
                employee_rate_percent: entry.employee_rate_percent,
                employer_rate_percent: entry.employer_rate_percent,
                effective_date,
                wage_floor: entry.wage_floor,
                wage_ceiling: entry.wage_ceiling,
            })
            .collect()
    }
}

/// The complete engine configuration.
///
/// Aggregates the statutory limits, the allocation ratio table, and all
/// rate records. Passed as an explicit value into every calculation so the
/// engine stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Statutory wage limits.
    limits: CpfLimits,
    /// Allocation ratios by age band.
    allocations: HashMap<AgeBand, AllocationRates>,
    /// Rate records, sorted ascending by effective date.
    rates: Vec<RateRecord>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// Rate records are sorted ascending by effective date so the resolver
    /// can find the latest applicable record with a reverse scan.
    pub fn new(
        limits: CpfLimits,
        allocations: HashMap<AgeBand, AllocationRates>,
        rates: Vec<RateRecord>,
    ) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            limits,
            allocations,
            rates: sorted_rates,
        }
    }

    /// Returns the statutory wage limits.
    pub fn limits(&self) -> &CpfLimits {
        &self.limits
    }

    /// Returns the allocation ratio table.
    pub fn allocations(&self) -> &HashMap<AgeBand, AllocationRates> {
        &self.allocations
    }

    /// Returns all rate records, sorted ascending by effective date.
    pub fn rates(&self) -> &[RateRecord] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_limits() -> CpfLimits {
        CpfLimits {
            ordinary_wage_ceiling: dec("6000"),
            additional_wage_ceiling: dec("102000"),
            minimum_wage_threshold: dec("50"),
        }
    }

    fn record(effective: NaiveDate) -> RateRecord {
        RateRecord {
            classification: EmployeeType::Citizen,
            age_band: AgeBand::LessThan55,
            employee_rate_percent: dec("20"),
            employer_rate_percent: dec("17"),
            effective_date: effective,
            wage_floor: dec("50"),
            wage_ceiling: dec("7400"),
        }
    }

    #[test]
    fn test_annual_ordinary_ceiling_is_twelve_months() {
        assert_eq!(test_limits().annual_ordinary_ceiling(), dec("72000"));
    }

    #[test]
    fn test_new_sorts_rates_by_effective_date() {
        let later = record(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let earlier = record(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let config = EngineConfig::new(test_limits(), HashMap::new(), vec![later, earlier]);

        let dates: Vec<NaiveDate> = config.rates().iter().map(|r| r.effective_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_schedule_file_stamps_effective_date() {
        let yaml = r#"
effective_date: 2024-01-01
records:
  - classification: citizen
    age_band: less_than_55
    employee_rate_percent: "20"
    employer_rate_percent: "17"
    wage_floor: "50"
    wage_ceiling: "7400"
  - classification: citizen
    age_band: from_55_to_60
    employee_rate_percent: "17"
    employer_rate_percent: "15.5"
    wage_floor: "50"
    wage_ceiling: "7400"
"#;
        let file: RateScheduleFile = serde_yaml::from_str(yaml).unwrap();
        let records = file.into_records();
        assert_eq!(records.len(), 2);
        assert!(
            records
                .iter()
                .all(|r| r.effective_date == NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(records[1].age_band, AgeBand::From55To60);
        assert_eq!(records[1].employer_rate_percent, dec("15.5"));
    }

    #[test]
    fn test_deserialize_allocations_config() {
        let yaml = r#"
allocations:
  less_than_55:
    special: "0.1621"
    medisave: "0.2162"
  above_65:
    special: "0.303"
    medisave: "0.6363"
"#;
        let config: AllocationsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.allocations.len(), 2);
        assert_eq!(
            config.allocations[&AgeBand::LessThan55].special,
            dec("0.1621")
        );
        assert_eq!(config.allocations[&AgeBand::Above65].medisave, dec("0.6363"));
    }
}
