//! Full payroll run.
//!
//! Produces a [`PayrollReport`] for a validated [`PayrollConfig`]: per-employee
//! breakdowns, the three roster totals and the three rankings, with an audit
//! trace covering every step.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::models::{AuditStep, AuditTrace, AuditWarning, Employee, PayrollReport};

use super::employee_pay::calculate_employee_pay;
use super::ranking::{top_bonus_earner, top_earner, top_seller};
use super::roster::{roster_total_pay, total_base_salaries, total_bonuses};

/// Warning code raised when a ranking has no candidate above zero.
pub const NO_WINNER_WARNING: &str = "NO_WINNER";

/// Runs payroll for the configured roster and reporting period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::run_payroll;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::builtin().unwrap().into_config();
/// let report = run_payroll(&config);
///
/// assert_eq!(report.total_pay, Decimal::new(202380, 0));
/// assert_eq!(report.top_seller.as_deref(), Some("Ana Silva"));
/// ```
pub fn run_payroll(config: &PayrollConfig) -> PayrollReport {
    let start_time = Instant::now();
    let run_id = Uuid::new_v4();
    let period = config.period();
    let roster = config.roster();
    let sales = config.sales();

    info!(
        run_id = %run_id,
        period = %period,
        employees = roster.len(),
        "Processing payroll run"
    );

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let mut employees = Vec::with_capacity(roster.len());
    for employee in roster {
        let result = calculate_employee_pay(employee, period, sales, step_number);
        step_number += result.audit_steps.len() as u32;
        for warning in &result.warnings {
            warn!(run_id = %run_id, code = %warning.code, "{}", warning.message);
        }
        steps.extend(result.audit_steps);
        warnings.extend(result.warnings);
        employees.push(result.pay);
    }

    let total_pay = roster_total_pay(roster, period, sales);
    let total_base = total_base_salaries(roster);
    let total_bonus = total_bonuses(roster, period, sales);
    debug_assert_eq!(
        total_pay,
        employees.iter().map(|e| e.total_pay).sum::<Decimal>()
    );
    debug_assert_eq!(
        total_base,
        employees.iter().map(|e| e.base_salary).sum::<Decimal>()
    );
    debug_assert_eq!(
        total_bonus,
        employees
            .iter()
            .filter(|e| e.category.is_bonus_eligible())
            .map(|e| e.bonus)
            .sum::<Decimal>()
    );
    steps.push(AuditStep {
        step_number,
        rule_id: "roster_totals".to_string(),
        rule_name: "Roster Totals".to_string(),
        input: serde_json::json!({
            "employees": roster.len(),
            "bonus_eligible": roster.iter().filter(|e| e.category.is_bonus_eligible()).count()
        }),
        output: serde_json::json!({
            "total_pay": total_pay.normalize().to_string(),
            "total_base_salaries": total_base.normalize().to_string(),
            "total_bonuses": total_bonus.normalize().to_string()
        }),
        reasoning: format!(
            "Summed {} employees; bonuses exclude managers",
            roster.len()
        ),
    });
    step_number += 1;

    let earner = top_earner(roster, period, sales);
    let bonus_earner = top_bonus_earner(roster, period, sales);
    let seller = top_seller(config.sales_team(), sales);

    let rankings = [
        ("top_earner", "Top Earner", "highest total pay", earner),
        (
            "top_bonus_earner",
            "Top Bonus Earner",
            "highest bonus among secretaries and salespeople",
            bonus_earner,
        ),
        ("top_seller", "Top Seller", "highest sales on the sales team", seller),
    ];
    for (rule_id, rule_name, criterion, winner) in rankings {
        steps.push(ranking_step(step_number, rule_id, rule_name, criterion, winner));
        step_number += 1;

        if winner.is_none() {
            let message = format!("No candidate scored above zero for {}", criterion);
            warn!(run_id = %run_id, ranking = rule_id, "{}", message);
            warnings.push(AuditWarning {
                code: NO_WINNER_WARNING.to_string(),
                message,
                severity: "low".to_string(),
            });
        }
    }

    let duration = start_time.elapsed();
    info!(
        run_id = %run_id,
        total_pay = %total_pay,
        warnings = warnings.len(),
        duration_us = duration.as_micros(),
        "Payroll run completed"
    );

    PayrollReport {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        run_name: config.metadata().name.clone(),
        period: *period,
        total_pay,
        total_base_salaries: total_base,
        total_bonuses: total_bonus,
        top_earner: earner.map(|e| e.name.clone()),
        top_bonus_earner: bonus_earner.map(|e| e.name.clone()),
        top_seller: seller.map(|e| e.name.clone()),
        employees,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    }
}

fn ranking_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    criterion: &str,
    winner: Option<&Employee>,
) -> AuditStep {
    let reasoning = match winner {
        Some(employee) => format!("{} has the {}", employee.name, criterion),
        None => format!("No winner: nobody scored above zero for {}", criterion),
    };

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "criterion": criterion,
            "threshold": Decimal::ZERO.to_string()
        }),
        output: serde_json::json!({
            "winner": winner.map(|e| e.name.as_str())
        }),
        reasoning,
    }
}
