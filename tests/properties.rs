//! Property-based tests for the contribution arithmetic invariants.
//!
//! These properties must hold for all valid inputs, not just the worked
//! examples: the sub-accounts reconcile with the total, capping is
//! idempotent and never exceeds its ceiling, and rounding is stable.

use std::collections::HashMap;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use cpf_engine::calculation::{
    calculate_contribution, cap_additional_wage, cap_ordinary_wage,
    remaining_additional_wage_ceiling, round_result, round_to_cents,
};
use cpf_engine::config::{AllocationRates, CpfLimits, EngineConfig};
use cpf_engine::models::{AgeBand, ContributionResult, EmployeeType, PayrollInput, RateRecord};

fn cents(n: i64) -> Decimal {
    Decimal::new(n, 2)
}

fn test_limits() -> CpfLimits {
    CpfLimits {
        ordinary_wage_ceiling: Decimal::from(6000),
        additional_wage_ceiling: Decimal::from(102000),
        minimum_wage_threshold: Decimal::from(50),
    }
}

fn test_config() -> EngineConfig {
    let mut allocations = HashMap::new();
    allocations.insert(
        AgeBand::LessThan55,
        AllocationRates {
            special: Decimal::new(1621, 4),
            medisave: Decimal::new(2162, 4),
        },
    );
    allocations.insert(
        AgeBand::From55To60,
        AllocationRates {
            special: Decimal::new(3076, 4),
            medisave: Decimal::new(323, 3),
        },
    );
    allocations.insert(
        AgeBand::From60To65,
        AllocationRates {
            special: Decimal::new(4042, 4),
            medisave: Decimal::new(4468, 4),
        },
    );
    allocations.insert(
        AgeBand::Above65,
        AllocationRates {
            special: Decimal::new(303, 3),
            medisave: Decimal::new(6363, 4),
        },
    );

    let effective = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let band_rates = [
        (AgeBand::LessThan55, "20", "17"),
        (AgeBand::From55To60, "17", "15.5"),
        (AgeBand::From60To65, "11.5", "12"),
        (AgeBand::Above65, "7.5", "5"),
    ];
    let rates = band_rates
        .iter()
        .map(|(age_band, employee, employer)| RateRecord {
            classification: EmployeeType::Citizen,
            age_band: *age_band,
            employee_rate_percent: employee.parse().unwrap(),
            employer_rate_percent: employer.parse().unwrap(),
            effective_date: effective,
            wage_floor: Decimal::from(50),
            wage_ceiling: Decimal::from(7400),
        })
        .collect();

    EngineConfig::new(test_limits(), allocations, rates)
}

proptest! {
    #[test]
    fn prop_accounts_reconcile_with_total(
        salary_cents in 5_000i64..=2_000_000,
        additional_cents in 0i64..=5_000_000,
        ytd_ordinary_cents in 0i64..=7_200_000,
        ytd_additional_cents in 0i64..=4_000_000,
        age in 16u32..=90,
    ) {
        let config = test_config();
        let input = PayrollInput {
            employee_id: "emp_prop".to_string(),
            classification: EmployeeType::Citizen,
            age,
            basic_salary: cents(salary_cents),
            additional_wages: cents(additional_cents),
            ytd_ordinary_wages: cents(ytd_ordinary_cents),
            ytd_additional_wages: cents(ytd_additional_cents),
        };
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

        let result = calculate_contribution(&input, as_of, &config).unwrap();

        let account_sum = result.ordinary + result.special + result.medisave;
        let account_drift = (account_sum - result.total_contribution).abs();
        prop_assert!(account_drift <= cents(1), "account drift {}", account_drift);

        let split_sum = result.employee_contribution + result.employer_contribution;
        let split_drift = (split_sum - result.total_contribution).abs();
        prop_assert!(split_drift <= cents(1), "split drift {}", split_drift);
    }

    #[test]
    fn prop_ordinary_capping_is_idempotent_and_bounded(salary_cents in 0i64..=5_000_000) {
        let limits = test_limits();
        let capped = cap_ordinary_wage(cents(salary_cents), &limits);

        prop_assert!(capped <= limits.ordinary_wage_ceiling);
        prop_assert_eq!(cap_ordinary_wage(capped, &limits), capped);
    }

    #[test]
    fn prop_additional_cap_never_exceeds_headroom(
        additional_cents in 0i64..=20_000_000,
        ytd_ordinary_cents in 0i64..=12_000_000,
        ytd_additional_cents in 0i64..=12_000_000,
    ) {
        let limits = test_limits();
        let ytd_ordinary = cents(ytd_ordinary_cents);
        let ytd_additional = cents(ytd_additional_cents);

        let headroom =
            remaining_additional_wage_ceiling(ytd_ordinary, ytd_additional, &limits);
        let capped =
            cap_additional_wage(cents(additional_cents), ytd_ordinary, ytd_additional, &limits);

        prop_assert!(headroom >= Decimal::ZERO);
        prop_assert!(capped >= Decimal::ZERO);
        prop_assert!(capped <= headroom);
        prop_assert!(capped <= cents(additional_cents));
    }

    #[test]
    fn prop_rounding_is_stable(mantissa in -1_000_000_000i64..=1_000_000_000) {
        let amount = Decimal::new(mantissa, 4);
        let once = round_to_cents(amount);

        prop_assert_eq!(round_to_cents(once), once);
        prop_assert!((once - amount).abs() <= Decimal::new(5, 3));
    }

    #[test]
    fn prop_round_result_is_stable(
        employee in 0i64..=1_000_000_000,
        employer in 0i64..=1_000_000_000,
        ordinary in 0i64..=1_000_000_000,
        special in 0i64..=1_000_000_000,
        medisave in 0i64..=1_000_000_000,
    ) {
        let result = ContributionResult {
            employee_contribution: Decimal::new(employee, 4),
            employer_contribution: Decimal::new(employer, 4),
            total_contribution: Decimal::new(employee + employer, 4),
            ordinary: Decimal::new(ordinary, 4),
            special: Decimal::new(special, 4),
            medisave: Decimal::new(medisave, 4),
        };

        let once = round_result(result);
        prop_assert_eq!(round_result(once.clone()), once);
    }

    #[test]
    fn prop_every_adult_age_maps_to_a_band(age in 16u32..=120) {
        prop_assert!(AgeBand::from_age(age).is_some());
    }

    #[test]
    fn prop_child_ages_map_to_no_band(age in 0u32..=15) {
        prop_assert!(AgeBand::from_age(age).is_none());
    }
}
