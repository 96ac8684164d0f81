//! Request types for the CPF Contribution Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/bulk-calculate` endpoints, and the query parameters for `/rates`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AgeBand, EmployeeType, PayrollInput, PayrollPeriod};

/// Request body for the `/calculate` endpoint.
///
/// Contains one employee's payroll details for a single contribution
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's residency classification.
    pub employee_type: EmployeeType,
    /// The employee's age in whole years.
    pub age: u32,
    /// The monthly ordinary wage (basic salary).
    pub basic_salary: Decimal,
    /// Additional (non-regular) wages for this cycle.
    #[serde(default)]
    pub additional_wages: Decimal,
    /// Year-to-date ordinary wages.
    #[serde(default)]
    pub ytd_ordinary_wages: Decimal,
    /// Year-to-date additional wages.
    #[serde(default)]
    pub ytd_additional_wages: Decimal,
    /// Optional calculation date for rate resolution; defaults to today.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}

impl From<CalculationRequest> for PayrollInput {
    fn from(req: CalculationRequest) -> Self {
        PayrollInput {
            employee_id: req.employee_id,
            classification: req.employee_type,
            age: req.age,
            basic_salary: req.basic_salary,
            additional_wages: req.additional_wages,
            ytd_ordinary_wages: req.ytd_ordinary_wages,
            ytd_additional_wages: req.ytd_additional_wages,
        }
    }
}

/// One employee's entry in a bulk calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkEmployeeRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's residency classification.
    pub employee_type: EmployeeType,
    /// The employee's age in whole years.
    pub age: u32,
    /// The monthly ordinary wage (basic salary).
    pub basic_salary: Decimal,
    /// Additional (non-regular) wages for this cycle.
    #[serde(default)]
    pub additional_wages: Decimal,
    /// Year-to-date ordinary wages.
    #[serde(default)]
    pub ytd_ordinary_wages: Decimal,
    /// Year-to-date additional wages.
    #[serde(default)]
    pub ytd_additional_wages: Decimal,
}

impl From<BulkEmployeeRequest> for PayrollInput {
    fn from(req: BulkEmployeeRequest) -> Self {
        PayrollInput {
            employee_id: req.employee_id,
            classification: req.employee_type,
            age: req.age,
            basic_salary: req.basic_salary,
            additional_wages: req.additional_wages,
            ytd_ordinary_wages: req.ytd_ordinary_wages,
            ytd_additional_wages: req.ytd_additional_wages,
        }
    }
}

/// Request body for the `/bulk-calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCalculationRequest {
    /// The payroll period the batch covers.
    pub payroll_period: PayrollPeriod,
    /// The employees to process.
    pub employees: Vec<BulkEmployeeRequest>,
}

/// Query parameters for the `/rates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesQuery {
    /// The employee classification to look up.
    pub employee_type: EmployeeType,
    /// The age band to look up.
    pub age_band: AgeBand,
    /// Optional as-of date for the lookup; defaults to today.
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}
