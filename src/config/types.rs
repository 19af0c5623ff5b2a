//! Configuration types for a payroll run.
//!
//! This module contains the structures deserialized from the YAML files of a
//! run directory and the validated [`PayrollConfig`] built from them.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ReportingPeriod, SalesByName};

/// Metadata about the run (`payroll.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RunMetadata {
    /// Human-readable name of the run.
    pub name: String,
    /// The period every calculation is evaluated against.
    pub reporting_period: ReportingPeriod,
}

/// Roster file structure (`roster.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Employees in roster order.
    pub employees: Vec<Employee>,
    /// Names of the roster entries that form the sales team.
    #[serde(default)]
    pub sales_team: Vec<String>,
}

/// Sales file structure (`sales.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SalesFile {
    /// Sales per employee name for the reporting period.
    #[serde(default)]
    pub sales: SalesByName,
}

/// A validated payroll run configuration.
///
/// Guarantees: the period month and every hire month are in range, roster names
/// are unique, every sales team member is a salesperson on the roster, and no
/// sales amount is negative.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: RunMetadata,
    roster: Vec<Employee>,
    sales_team: Vec<Employee>,
    sales: SalesByName,
}

impl PayrollConfig {
    /// Validates the parts of a run and resolves sales team names to roster entries.
    pub fn new(
        metadata: RunMetadata,
        roster: Vec<Employee>,
        sales_team: &[String],
        sales: SalesByName,
    ) -> EngineResult<Self> {
        metadata.reporting_period.validate()?;

        let mut seen = HashSet::new();
        for employee in &roster {
            employee.validate()?;
            if !seen.insert(employee.name.as_str()) {
                return Err(EngineError::DuplicateEmployee {
                    name: employee.name.clone(),
                });
            }
        }

        let sales_team = sales_team
            .iter()
            .map(|name| -> EngineResult<Employee> {
                let employee = roster
                    .iter()
                    .find(|e| &e.name == name)
                    .ok_or_else(|| EngineError::EmployeeNotFound { name: name.clone() })?;
                if employee.is_salesperson() {
                    Ok(employee.clone())
                } else {
                    Err(EngineError::NotASalesperson { name: name.clone() })
                }
            })
            .collect::<EngineResult<Vec<_>>>()?;

        sales.validate()?;

        Ok(Self {
            metadata,
            roster,
            sales_team,
            sales,
        })
    }

    /// Returns the run metadata.
    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Returns the reporting period.
    pub fn period(&self) -> &ReportingPeriod {
        &self.metadata.reporting_period
    }

    /// Returns the full roster in order.
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Returns the sales team in the order it was configured.
    pub fn sales_team(&self) -> &[Employee] {
        &self.sales_team
    }

    /// Returns the sales figures.
    pub fn sales(&self) -> &SalesByName {
        &self.sales
    }
}
