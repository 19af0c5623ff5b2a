//! Calculation logic for the payroll engine.
//!
//! This module contains the pay rules (base salary, tenure, bonus and total
//! pay per employee), roster-wide totals, rankings, and the full payroll run
//! that ties them together.

mod base_salary;
mod bonus;
mod employee_pay;
mod payroll_run;
mod ranking;
mod roster;
mod tenure;

pub use base_salary::{BaseSalaryResult, base_salary, lookup_base_salary};
pub use bonus::{
    BonusResult, bonus, calculate_bonus, salesperson_commission_rate, salesperson_tenure_rate,
    secretary_base_share, secretary_tenure_rate,
};
pub use employee_pay::{EmployeePayResult, calculate_employee_pay, total_pay};
pub use payroll_run::{NO_WINNER_WARNING, run_payroll};
pub use ranking::{top_bonus_earner, top_earner, top_seller};
pub use roster::{roster_total_pay, total_base_salaries, total_bonuses};
pub use tenure::{NEGATIVE_TENURE_WARNING, TenureResult, calculate_tenure, tenure_months};
