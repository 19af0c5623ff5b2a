//! Base salary lookup functionality.
//!
//! Every category has a fixed monthly base salary that does not depend on
//! tenure or sales.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EmployeeCategory};

/// Returns the fixed base salary for a category.
///
/// Secretary 7000, Salesperson 12000, Manager 20000.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::base_salary;
/// use payroll_engine::models::EmployeeCategory;
/// use rust_decimal::Decimal;
///
/// assert_eq!(base_salary(EmployeeCategory::Secretary), Decimal::new(7000, 0));
/// assert_eq!(base_salary(EmployeeCategory::Manager), Decimal::new(20000, 0));
/// ```
pub fn base_salary(category: EmployeeCategory) -> Decimal {
    match category {
        EmployeeCategory::Secretary => Decimal::new(7000, 0),
        EmployeeCategory::Salesperson => Decimal::new(12000, 0),
        EmployeeCategory::Manager => Decimal::new(20000, 0),
    }
}

/// The result of a base salary lookup, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BaseSalaryResult {
    /// The base salary for the category.
    pub amount: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the base salary for a category and records the lookup.
pub fn lookup_base_salary(category: EmployeeCategory, step_number: u32) -> BaseSalaryResult {
    let amount = base_salary(category);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_salary".to_string(),
        rule_name: "Base Salary".to_string(),
        input: serde_json::json!({
            "category": category.as_str()
        }),
        output: serde_json::json!({
            "base_salary": amount.to_string()
        }),
        reasoning: format!("Fixed base salary for {}: ${}", category.as_str(), amount),
    };

    BaseSalaryResult { amount, audit_step }
}
