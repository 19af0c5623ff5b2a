//! Bonus calculation functionality.
//!
//! Each category has its own bonus formula:
//!
//! - Secretary: `1000 x tenure + 0.2 x base salary`
//! - Salesperson: `1800 x tenure + 0.3 x sales`
//! - Manager: no bonus
//!
//! Tenure is used as-is, so a negative tenure lowers the bonus.

use rust_decimal::Decimal;

use crate::models::{AuditStep, EmployeeCategory};

use super::base_salary::base_salary;

/// Per-month tenure bonus for secretaries.
pub fn secretary_tenure_rate() -> Decimal {
    Decimal::new(1000, 0)
}

/// Share of the secretary base salary paid as a fixed bonus (20%).
pub fn secretary_base_share() -> Decimal {
    Decimal::new(2, 1)
}

/// Per-month tenure bonus for salespeople.
pub fn salesperson_tenure_rate() -> Decimal {
    Decimal::new(1800, 0)
}

/// Commission on sales paid to salespeople (30%).
pub fn salesperson_commission_rate() -> Decimal {
    Decimal::new(3, 1)
}

/// Returns the bonus for a category given the period's sales and tenure.
///
/// Sales are ignored for secretaries and managers.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::bonus;
/// use payroll_engine::models::EmployeeCategory;
/// use rust_decimal::Decimal;
///
/// // 1000 x 47 + 0.2 x 7000
/// assert_eq!(bonus(EmployeeCategory::Secretary, Decimal::ZERO, 47), Decimal::new(48400, 0));
/// // 0.3 x 5200
/// assert_eq!(bonus(EmployeeCategory::Salesperson, Decimal::new(5200, 0), 0), Decimal::new(1560, 0));
/// assert_eq!(bonus(EmployeeCategory::Manager, Decimal::new(5200, 0), 90), Decimal::ZERO);
/// ```
pub fn bonus(category: EmployeeCategory, sales_amount: Decimal, tenure_months: i32) -> Decimal {
    let tenure = Decimal::from(tenure_months);
    match category {
        EmployeeCategory::Secretary => {
            secretary_tenure_rate() * tenure
                + secretary_base_share() * base_salary(EmployeeCategory::Secretary)
        }
        EmployeeCategory::Salesperson => {
            salesperson_tenure_rate() * tenure + salesperson_commission_rate() * sales_amount
        }
        EmployeeCategory::Manager => Decimal::ZERO,
    }
}

/// The result of a bonus calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BonusResult {
    /// The bonus amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the bonus for a category and records the formula that was applied.
pub fn calculate_bonus(
    category: EmployeeCategory,
    sales_amount: Decimal,
    tenure_months: i32,
    step_number: u32,
) -> BonusResult {
    let amount = bonus(category, sales_amount, tenure_months);

    let reasoning = match category {
        EmployeeCategory::Secretary => format!(
            "{} x {} months + {} x ${} = ${}",
            secretary_tenure_rate(),
            tenure_months,
            secretary_base_share(),
            base_salary(EmployeeCategory::Secretary),
            amount.normalize()
        ),
        EmployeeCategory::Salesperson => format!(
            "{} x {} months + {} x ${} sales = ${}",
            salesperson_tenure_rate(),
            tenure_months,
            salesperson_commission_rate(),
            sales_amount.normalize(),
            amount.normalize()
        ),
        EmployeeCategory::Manager => "No bonus applies to managers".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "bonus".to_string(),
        rule_name: "Category Bonus".to_string(),
        input: serde_json::json!({
            "category": category.as_str(),
            "sales_amount": sales_amount.normalize().to_string(),
            "tenure_months": tenure_months
        }),
        output: serde_json::json!({
            "bonus": amount.normalize().to_string()
        }),
        reasoning,
    };

    BonusResult { amount, audit_step }
}
