//! Tenure calculation functionality.
//!
//! Tenure is a linear month count between the hire month and the reporting
//! period. It is negative when the hire date lies after the period; the
//! value is still used as-is by the bonus formulas.

use crate::models::{AuditStep, AuditWarning, Employee, ReportingPeriod};

/// Warning code raised when an employee was hired after the reporting period.
pub const NEGATIVE_TENURE_WARNING: &str = "NEGATIVE_TENURE";

/// Returns the number of months between hire and the reporting period.
///
/// `(year - hire_year) * 12 + (month - hire_month)`, saturated to the `i32` range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tenure_months;
/// use payroll_engine::models::{Employee, ReportingPeriod};
///
/// let employee = Employee::secretary("Jorge Carvalho", 1, 2018).unwrap();
/// let period = ReportingPeriod::new(12, 2021).unwrap();
/// assert_eq!(tenure_months(&employee, &period), 47);
/// ```
pub fn tenure_months(employee: &Employee, period: &ReportingPeriod) -> i32 {
    let months = (i64::from(period.year) - i64::from(employee.hire_year)) * 12
        + (i64::from(period.month) - i64::from(employee.hire_month));
    months.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// The result of a tenure calculation.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// Months of tenure, possibly negative.
    pub months: i32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when the hire date is after the reporting period.
    pub warning: Option<AuditWarning>,
}

/// Calculates tenure and records the calculation.
pub fn calculate_tenure(
    employee: &Employee,
    period: &ReportingPeriod,
    step_number: u32,
) -> TenureResult {
    let months = tenure_months(employee, period);

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure".to_string(),
        rule_name: "Tenure".to_string(),
        input: serde_json::json!({
            "employee": employee.name,
            "hire_month": employee.hire_month,
            "hire_year": employee.hire_year,
            "period_month": period.month,
            "period_year": period.year
        }),
        output: serde_json::json!({
            "tenure_months": months
        }),
        reasoning: format!(
            "({} - {}) x 12 + ({} - {}) = {} months",
            period.year, employee.hire_year, period.month, employee.hire_month, months
        ),
    };

    let warning = (months < 0).then(|| AuditWarning {
        code: NEGATIVE_TENURE_WARNING.to_string(),
        message: format!(
            "{} was hired {:02}/{}, after the reporting period {}; tenure is {} months",
            employee.name, employee.hire_month, employee.hire_year, period, months
        ),
        severity: "medium".to_string(),
    });

    TenureResult {
        months,
        audit_step,
        warning,
    }
}
