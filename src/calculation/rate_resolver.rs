//! Contribution rate resolution.
//!
//! This module resolves the rate record applicable to a calculation: the
//! most recent record for a (classification, age band) pair whose effective
//! date is on or before the calculation date.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeBand, EmployeeType, RateRecord};

/// Resolves the applicable contribution rate record.
///
/// Selects the record for the (classification, age band) pair with the
/// maximum effective date on or before `as_of`. The `rates` slice must be
/// sorted ascending by effective date (as guaranteed by
/// [`EngineConfig`](crate::config::EngineConfig)), so the latest applicable
/// record is found with a reverse scan.
///
/// # Arguments
///
/// * `classification` - The employee's residency classification
/// * `age_band` - The employee's age band
/// * `as_of` - The calculation date
/// * `rates` - All rate records, sorted ascending by effective date
///
/// # Returns
///
/// Returns the applicable record, or `RateNotFound` if no record for the
/// pair is effective on or before `as_of`. Paying at the wrong rate is a
/// compliance violation, so absence is a hard error, never a zero-rate
/// default.
pub fn resolve_rate(
    classification: EmployeeType,
    age_band: AgeBand,
    as_of: NaiveDate,
    rates: &[RateRecord],
) -> EngineResult<&RateRecord> {
    rates
        .iter()
        .rfind(|r| {
            r.classification == classification
                && r.age_band == age_band
                && r.effective_date <= as_of
        })
        .ok_or(EngineError::RateNotFound {
            classification,
            age_band,
            date: as_of,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(
        classification: EmployeeType,
        age_band: AgeBand,
        employee_rate: &str,
        effective: NaiveDate,
    ) -> RateRecord {
        RateRecord {
            classification,
            age_band,
            employee_rate_percent: dec(employee_rate),
            employer_rate_percent: dec("17"),
            effective_date: effective,
            wage_floor: dec("50"),
            wage_ceiling: dec("7400"),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolves_matching_pair() {
        let rates = vec![record(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            "20",
            date(2024, 1, 1),
        )];

        let resolved = resolve_rate(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            date(2026, 8, 1),
            &rates,
        )
        .unwrap();

        assert_eq!(resolved.employee_rate_percent, dec("20"));
    }

    #[test]
    fn test_picks_latest_record_on_or_before_date() {
        // Sorted ascending, as EngineConfig guarantees.
        let rates = vec![
            record(
                EmployeeType::Citizen,
                AgeBand::LessThan55,
                "19",
                date(2023, 1, 1),
            ),
            record(
                EmployeeType::Citizen,
                AgeBand::LessThan55,
                "20",
                date(2024, 1, 1),
            ),
            record(
                EmployeeType::Citizen,
                AgeBand::LessThan55,
                "21",
                date(2027, 1, 1),
            ),
        ];

        let resolved = resolve_rate(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            date(2026, 8, 1),
            &rates,
        )
        .unwrap();

        // The 2027 record is not yet effective; the 2024 record wins.
        assert_eq!(resolved.employee_rate_percent, dec("20"));
        assert_eq!(resolved.effective_date, date(2024, 1, 1));
    }

    #[test]
    fn test_record_effective_on_the_calculation_date_applies() {
        let rates = vec![record(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            "20",
            date(2024, 1, 1),
        )];

        let resolved = resolve_rate(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            date(2024, 1, 1),
            &rates,
        )
        .unwrap();

        assert_eq!(resolved.effective_date, date(2024, 1, 1));
    }

    #[test]
    fn test_missing_pair_returns_rate_not_found() {
        let rates = vec![record(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            "20",
            date(2024, 1, 1),
        )];

        let result = resolve_rate(
            EmployeeType::PrSecondYear,
            AgeBand::Above65,
            date(2026, 8, 1),
            &rates,
        );

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::RateNotFound {
                classification,
                age_band,
                date: d,
            } => {
                assert_eq!(classification, EmployeeType::PrSecondYear);
                assert_eq!(age_band, AgeBand::Above65);
                assert_eq!(d, date(2026, 8, 1));
            }
            other => panic!("Expected RateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_only_future_records_returns_rate_not_found() {
        let rates = vec![record(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            "20",
            date(2027, 1, 1),
        )];

        let result = resolve_rate(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            date(2026, 8, 1),
            &rates,
        );

        assert!(matches!(
            result.unwrap_err(),
            EngineError::RateNotFound { .. }
        ));
    }

    #[test]
    fn test_band_mismatch_is_not_used() {
        let rates = vec![record(
            EmployeeType::Citizen,
            AgeBand::From55To60,
            "17",
            date(2024, 1, 1),
        )];

        let result = resolve_rate(
            EmployeeType::Citizen,
            AgeBand::LessThan55,
            date(2026, 8, 1),
            &rates,
        );

        assert!(result.is_err());
    }
}
