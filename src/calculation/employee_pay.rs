//! Per-employee pay calculation.
//!
//! Combines tenure, base salary and bonus into an [`EmployeePay`] breakdown.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AuditStep, AuditWarning, Employee, EmployeeCategory, EmployeePay, ReportingPeriod,
    SalesByName,
};

use super::base_salary::{base_salary, lookup_base_salary};
use super::bonus::{bonus, calculate_bonus};
use super::tenure::calculate_tenure;

/// Returns base salary plus bonus for a category.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::total_pay;
/// use payroll_engine::models::EmployeeCategory;
/// use rust_decimal::Decimal;
///
/// assert_eq!(total_pay(EmployeeCategory::Secretary, Decimal::ZERO, 72), Decimal::new(80400, 0));
/// assert_eq!(total_pay(EmployeeCategory::Manager, Decimal::ZERO, 53), Decimal::new(20000, 0));
/// ```
pub fn total_pay(category: EmployeeCategory, sales_amount: Decimal, tenure_months: i32) -> Decimal {
    base_salary(category) + bonus(category, sales_amount, tenure_months)
}

/// The result of calculating one employee's pay.
#[derive(Debug, Clone)]
pub struct EmployeePayResult {
    /// The pay breakdown.
    pub pay: EmployeePay,
    /// Audit steps in the order they were applied.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised for this employee.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the full pay breakdown for one employee.
///
/// Records four audit steps numbered from `first_step`: tenure, base salary,
/// bonus and total pay.
pub fn calculate_employee_pay(
    employee: &Employee,
    period: &ReportingPeriod,
    sales: &SalesByName,
    first_step: u32,
) -> EmployeePayResult {
    let mut step_number = first_step;
    let mut audit_steps = Vec::with_capacity(4);
    let mut warnings = Vec::new();

    let sales_amount = sales.amount_for(&employee.name);

    let tenure = calculate_tenure(employee, period, step_number);
    audit_steps.push(tenure.audit_step);
    warnings.extend(tenure.warning);
    step_number += 1;

    let base = lookup_base_salary(employee.category, step_number);
    audit_steps.push(base.audit_step);
    step_number += 1;

    let bonus_result = calculate_bonus(employee.category, sales_amount, tenure.months, step_number);
    audit_steps.push(bonus_result.audit_step);
    step_number += 1;

    let total = base.amount + bonus_result.amount;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "total_pay".to_string(),
        rule_name: "Total Pay".to_string(),
        input: serde_json::json!({
            "base_salary": base.amount.normalize().to_string(),
            "bonus": bonus_result.amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_pay": total.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} = ${}",
            base.amount.normalize(),
            bonus_result.amount.normalize(),
            total.normalize()
        ),
    });

    debug!(
        employee = %employee.name,
        category = employee.category.as_str(),
        tenure_months = tenure.months,
        total_pay = %total,
        "Calculated employee pay"
    );

    EmployeePayResult {
        pay: EmployeePay {
            name: employee.name.clone(),
            category: employee.category,
            tenure_months: tenure.months,
            sales_amount,
            base_salary: base.amount,
            bonus: bonus_result.amount,
            total_pay: total,
        },
        audit_steps,
        warnings,
    }
}
