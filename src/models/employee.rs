//! Employee classification and age band types.
//!
//! This module defines the EmployeeType and AgeBand enums used to key
//! contribution rate lookups and account allocation ratios.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the residency classification of an employee for CPF purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Singapore citizen (full contribution rates).
    Citizen,
    /// Permanent resident in the first year of PR status (graduated rates).
    PrFirstYear,
    /// Permanent resident in the second year of PR status (graduated rates).
    PrSecondYear,
}

impl EmployeeType {
    /// Returns the snake_case label used in configuration and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::Citizen => "citizen",
            EmployeeType::PrFirstYear => "pr_first_year",
            EmployeeType::PrSecondYear => "pr_second_year",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four fixed age bands that determine both the applicable
/// contribution rate and the account allocation ratios.
///
/// The bands are half-open intervals over age in years: `[16,55)`, `[55,60)`,
/// `[60,65)`, and `[65,∞)`. Boundary ages 55, 60, and 65 always map to the
/// upper band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    /// Ages 16 (inclusive) to 55 (exclusive).
    ///
    /// Explicit renames throughout: `rename_all = "snake_case"` keeps
    /// digits glued to the preceding word (`less_than55`), which is not
    /// the label the config files and API contracts use.
    #[serde(rename = "less_than_55")]
    LessThan55,
    /// Ages 55 (inclusive) to 60 (exclusive).
    #[serde(rename = "from_55_to_60")]
    From55To60,
    /// Ages 60 (inclusive) to 65 (exclusive).
    #[serde(rename = "from_60_to_65")]
    From60To65,
    /// Ages 65 and above.
    #[serde(rename = "above_65")]
    Above65,
}

impl AgeBand {
    /// Maps an age in whole years to its CPF age band.
    ///
    /// Ages below 16 are not subject to CPF contributions and yield `None`;
    /// the calculation pipeline reports that as invalid payroll data.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpf_engine::models::AgeBand;
    ///
    /// assert_eq!(AgeBand::from_age(30), Some(AgeBand::LessThan55));
    /// assert_eq!(AgeBand::from_age(55), Some(AgeBand::From55To60));
    /// assert_eq!(AgeBand::from_age(15), None);
    /// ```
    pub fn from_age(age: u32) -> Option<AgeBand> {
        match age {
            0..=15 => None,
            16..=54 => Some(AgeBand::LessThan55),
            55..=59 => Some(AgeBand::From55To60),
            60..=64 => Some(AgeBand::From60To65),
            _ => Some(AgeBand::Above65),
        }
    }

    /// Returns the snake_case label used in configuration and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::LessThan55 => "less_than_55",
            AgeBand::From55To60 => "from_55_to_60",
            AgeBand::From60To65 => "from_60_to_65",
            AgeBand::Above65 => "above_65",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
