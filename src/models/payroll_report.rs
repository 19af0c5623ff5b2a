//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and the structures it is
//! built from: per-employee pay breakdowns and the audit trace recording
//! every rule application of a run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeCategory, ReportingPeriod};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were accepted but deserve a second look,
/// such as a hire date after the reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Pay breakdown for one employee in one reporting period.
///
/// `total_pay` is always exactly `base_salary + bonus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePay {
    /// The employee's name.
    pub name: String,
    /// The employee's category.
    pub category: EmployeeCategory,
    /// Months between hire and the reporting period (may be negative).
    pub tenure_months: i32,
    /// Sales attributed to the employee for the period.
    pub sales_amount: Decimal,
    /// The category base salary.
    pub base_salary: Decimal,
    /// The category bonus.
    pub bonus: Decimal,
    /// Base salary plus bonus.
    pub total_pay: Decimal,
}

/// The complete result of a payroll run.
///
/// Winner fields are `None` when no candidate scored above zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The name of the run, from configuration.
    pub run_name: String,
    /// The reporting period the run was evaluated for.
    pub period: ReportingPeriod,
    /// Sum of total pay over the roster.
    pub total_pay: Decimal,
    /// Sum of base salaries over the roster.
    pub total_base_salaries: Decimal,
    /// Sum of bonuses over bonus-eligible employees.
    pub total_bonuses: Decimal,
    /// Name of the employee with the highest total pay.
    pub top_earner: Option<String>,
    /// Name of the bonus-eligible employee with the highest bonus.
    pub top_bonus_earner: Option<String>,
    /// Name of the sales team member with the highest sales.
    pub top_seller: Option<String>,
    /// Per-employee breakdowns in roster order.
    pub employees: Vec<EmployeePay>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Placeholder printed for a ranking with no winner.
pub const NO_WINNER: &str = "none";

impl PayrollReport {
    /// Renders the console summary, one line per figure in fixed order.
    ///
    /// Amounts are printed in normalized form (`202380`, `1560.5`).
    pub fn summary_lines(&self) -> Vec<String> {
        let winner = |name: &Option<String>| name.as_deref().unwrap_or(NO_WINNER).to_string();

        vec![
            format!("Total pay: {}", self.total_pay.normalize()),
            format!(
                "Total base salaries: {}",
                self.total_base_salaries.normalize()
            ),
            format!("Total bonuses: {}", self.total_bonuses.normalize()),
            format!("Top earner: {}", winner(&self.top_earner)),
            format!("Top bonus earner: {}", winner(&self.top_bonus_earner)),
            format!("Top seller: {}", winner(&self.top_seller)),
        ]
    }

    /// Looks up the breakdown of an employee by name.
    pub fn employee(&self, name: &str) -> Option<&EmployeePay> {
        self.employees.iter().find(|e| e.name == name)
    }
}
