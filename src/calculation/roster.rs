//! Roster-wide totals.
//!
//! Sums over a roster for one reporting period. Sales are looked up by
//! employee name and default to zero.

use rust_decimal::Decimal;

use crate::models::{Employee, ReportingPeriod, SalesByName};

use super::base_salary::base_salary;
use super::bonus::bonus;
use super::employee_pay::total_pay;
use super::tenure::tenure_months;

/// Returns the sum of total pay (base salary plus bonus) over the roster.
pub fn roster_total_pay(
    roster: &[Employee],
    period: &ReportingPeriod,
    sales: &SalesByName,
) -> Decimal {
    roster
        .iter()
        .map(|employee| {
            total_pay(
                employee.category,
                sales.amount_for(&employee.name),
                tenure_months(employee, period),
            )
        })
        .sum()
}

/// Returns the sum of base salaries over the roster.
///
/// Base salaries do not depend on the reporting period.
pub fn total_base_salaries(roster: &[Employee]) -> Decimal {
    roster
        .iter()
        .map(|employee| base_salary(employee.category))
        .sum()
}

/// Returns the sum of bonuses over the bonus-eligible members of the roster.
///
/// Managers are filtered out by [`EmployeeCategory::is_bonus_eligible`]
/// rather than contributing their zero bonus.
///
/// [`EmployeeCategory::is_bonus_eligible`]: crate::models::EmployeeCategory::is_bonus_eligible
pub fn total_bonuses(roster: &[Employee], period: &ReportingPeriod, sales: &SalesByName) -> Decimal {
    roster
        .iter()
        .filter(|employee| employee.category.is_bonus_eligible())
        .map(|employee| {
            bonus(
                employee.category,
                sales.amount_for(&employee.name),
                tenure_months(employee, period),
            )
        })
        .sum()
}
