//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and [`EmployeeCategory`] enum
//! for representing the people on a payroll roster.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The job category of an employee.
///
/// Each category fixes a base salary and a bonus formula; see
/// [`crate::calculation::base_salary`] and [`crate::calculation::bonus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// Administrative staff.
    Secretary,
    /// Sales staff, paid a commission on their monthly sales.
    Salesperson,
    /// Managers, who receive no bonus.
    Manager,
}

impl EmployeeCategory {
    /// Returns true if the category takes part in bonus aggregation and ranking.
    ///
    /// Managers are excluded explicitly even though their bonus is always zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeCategory;
    ///
    /// assert!(EmployeeCategory::Secretary.is_bonus_eligible());
    /// assert!(EmployeeCategory::Salesperson.is_bonus_eligible());
    /// assert!(!EmployeeCategory::Manager.is_bonus_eligible());
    /// ```
    pub fn is_bonus_eligible(self) -> bool {
        matches!(
            self,
            EmployeeCategory::Secretary | EmployeeCategory::Salesperson
        )
    }

    /// Returns the snake_case identifier used in configuration and audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeCategory::Secretary => "secretary",
            EmployeeCategory::Salesperson => "salesperson",
            EmployeeCategory::Manager => "manager",
        }
    }
}

/// Represents an employee on the roster.
///
/// The name doubles as the key into [`crate::models::SalesByName`], so it must be
/// unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Full name, unique across the roster.
    pub name: String,
    /// The job category.
    pub category: EmployeeCategory,
    /// Month of hire (1-12).
    pub hire_month: u32,
    /// Year of hire.
    pub hire_year: i32,
}

impl Employee {
    /// Creates an employee after validating the name and hire month.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeCategory};
    ///
    /// let employee = Employee::new("Jorge Carvalho", EmployeeCategory::Secretary, 1, 2018).unwrap();
    /// assert_eq!(employee.hire_year, 2018);
    ///
    /// assert!(Employee::new("Jorge Carvalho", EmployeeCategory::Secretary, 13, 2018).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: EmployeeCategory,
        hire_month: u32,
        hire_year: i32,
    ) -> EngineResult<Self> {
        let employee = Self {
            name: name.into(),
            category,
            hire_month,
            hire_year,
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Shorthand for [`Employee::new`] with [`EmployeeCategory::Secretary`].
    pub fn secretary(name: impl Into<String>, hire_month: u32, hire_year: i32) -> EngineResult<Self> {
        Self::new(name, EmployeeCategory::Secretary, hire_month, hire_year)
    }

    /// Shorthand for [`Employee::new`] with [`EmployeeCategory::Salesperson`].
    pub fn salesperson(
        name: impl Into<String>,
        hire_month: u32,
        hire_year: i32,
    ) -> EngineResult<Self> {
        Self::new(name, EmployeeCategory::Salesperson, hire_month, hire_year)
    }

    /// Shorthand for [`Employee::new`] with [`EmployeeCategory::Manager`].
    pub fn manager(name: impl Into<String>, hire_month: u32, hire_year: i32) -> EngineResult<Self> {
        Self::new(name, EmployeeCategory::Manager, hire_month, hire_year)
    }

    /// Checks the invariants of a record, e.g. one produced by deserialization.
    ///
    /// The hire month must be 1-12 and the hire year inside the `chrono` calendar.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                name: self.name.clone(),
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(1..=12).contains(&self.hire_month) {
            return Err(EngineError::InvalidEmployee {
                name: self.name.clone(),
                field: "hire_month".to_string(),
                message: format!("must be between 1 and 12, got {}", self.hire_month),
            });
        }
        if NaiveDate::from_ymd_opt(self.hire_year, self.hire_month, 1).is_none() {
            return Err(EngineError::InvalidEmployee {
                name: self.name.clone(),
                field: "hire_year".to_string(),
                message: format!("{} is outside the supported calendar range", self.hire_year),
            });
        }
        Ok(())
    }

    /// Returns true if the employee is a salesperson.
    pub fn is_salesperson(&self) -> bool {
        self.category == EmployeeCategory::Salesperson
    }
}
