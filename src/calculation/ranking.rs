//! Roster rankings.
//!
//! Each ranking keeps a running maximum that starts at zero and only moves on
//! a strictly greater value. Consequences:
//!
//! - ties go to the first employee in roster order;
//! - if no candidate scores above zero there is no winner, even when the
//!   roster is not empty.

use rust_decimal::Decimal;

use crate::models::{Employee, ReportingPeriod, SalesByName};

use super::bonus::bonus;
use super::employee_pay::total_pay;
use super::tenure::tenure_months;

/// Returns the first candidate with the strictly highest value above zero,
/// together with that value.
pub(crate) fn leader<'a, I>(candidates: I) -> Option<(&'a Employee, Decimal)>
where
    I: IntoIterator<Item = (&'a Employee, Decimal)>,
{
    let mut best = None;
    let mut best_value = Decimal::ZERO;

    for (employee, value) in candidates {
        if value > best_value {
            best_value = value;
            best = Some(employee);
        }
    }

    best.map(|employee| (employee, best_value))
}

/// Returns the employee with the highest total pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::top_earner;
/// use payroll_engine::models::{Employee, ReportingPeriod, SalesByName};
///
/// let roster = vec![
///     Employee::manager("Juliana Alves", 7, 2017).unwrap(),
///     Employee::secretary("Maria Souza", 12, 2015).unwrap(),
/// ];
/// let period = ReportingPeriod::new(12, 2021).unwrap();
///
/// let winner = top_earner(&roster, &period, &SalesByName::new()).unwrap();
/// assert_eq!(winner.name, "Maria Souza");
/// ```
pub fn top_earner<'a>(
    roster: &'a [Employee],
    period: &ReportingPeriod,
    sales: &SalesByName,
) -> Option<&'a Employee> {
    leader(roster.iter().map(|employee| {
        let pay = total_pay(
            employee.category,
            sales.amount_for(&employee.name),
            tenure_months(employee, period),
        );
        (employee, pay)
    }))
    .map(|(employee, _)| employee)
}

/// Returns the bonus-eligible employee with the highest bonus.
pub fn top_bonus_earner<'a>(
    roster: &'a [Employee],
    period: &ReportingPeriod,
    sales: &SalesByName,
) -> Option<&'a Employee> {
    leader(
        roster
            .iter()
            .filter(|employee| employee.category.is_bonus_eligible())
            .map(|employee| {
                let amount = bonus(
                    employee.category,
                    sales.amount_for(&employee.name),
                    tenure_months(employee, period),
                );
                (employee, amount)
            }),
    )
    .map(|(employee, _)| employee)
}

/// Returns the salesperson with the highest sales.
///
/// Entries that are not salespeople are skipped.
pub fn top_seller<'a>(salespeople: &'a [Employee], sales: &SalesByName) -> Option<&'a Employee> {
    leader(
        salespeople
            .iter()
            .filter(|employee| employee.is_salesperson())
            .map(|employee| (employee, sales.amount_for(&employee.name))),
    )
    .map(|(employee, _)| employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn december_2021() -> ReportingPeriod {
        ReportingPeriod::new(12, 2021).unwrap()
    }

    fn create_roster() -> Vec<Employee> {
        vec![
            Employee::secretary("Jorge Carvalho", 1, 2018).unwrap(),
            Employee::secretary("Maria Souza", 12, 2015).unwrap(),
            Employee::salesperson("Ana Silva", 12, 2021).unwrap(),
            Employee::salesperson("João Mendes", 12, 2021).unwrap(),
            Employee::manager("Juliana Alves", 7, 2017).unwrap(),
            Employee::manager("Bento Albino", 3, 2014).unwrap(),
        ]
    }

    fn december_sales() -> SalesByName {
        let mut sales = SalesByName::new();
        sales.record("Ana Silva", dec("5200")).unwrap();
        sales.record("João Mendes", dec("3400")).unwrap();
        sales
    }

    #[test]
    fn test_top_earner() {
        let roster = create_roster();
        let winner = top_earner(&roster, &december_2021(), &december_sales()).unwrap();
        assert_eq!(winner.name, "Maria Souza");
    }

    #[test]
    fn test_top_bonus_earner() {
        let roster = create_roster();
        let winner = top_bonus_earner(&roster, &december_2021(), &december_sales()).unwrap();
        assert_eq!(winner.name, "Maria Souza");
    }

    #[test]
    fn test_top_seller() {
        let roster = create_roster();
        let winner = top_seller(&roster[2..4], &december_sales()).unwrap();
        assert_eq!(winner.name, "Ana Silva");
    }

    #[test]
    fn test_tie_keeps_first_in_roster_order() {
        let roster = vec![
            Employee::manager("Juliana Alves", 7, 2017).unwrap(),
            Employee::manager("Bento Albino", 3, 2014).unwrap(),
        ];
        let winner = top_earner(&roster, &december_2021(), &SalesByName::new()).unwrap();
        assert_eq!(winner.name, "Juliana Alves");

        let salespeople = vec![
            Employee::salesperson("Ana Silva", 12, 2021).unwrap(),
            Employee::salesperson("João Mendes", 12, 2021).unwrap(),
        ];
        let mut sales = SalesByName::new();
        sales.record("Ana Silva", dec("100")).unwrap();
        sales.record("João Mendes", dec("100")).unwrap();
        assert_eq!(top_seller(&salespeople, &sales).unwrap().name, "Ana Silva");
    }

    #[test]
    fn test_no_winner_when_nothing_above_zero() {
        let salespeople = vec![
            Employee::salesperson("Ana Silva", 12, 2021).unwrap(),
            Employee::salesperson("João Mendes", 12, 2021).unwrap(),
        ];
        assert!(top_seller(&salespeople, &SalesByName::new()).is_none());
        assert!(top_bonus_earner(&salespeople, &december_2021(), &SalesByName::new()).is_none());
    }

    #[test]
    fn test_top_bonus_earner_ignores_managers() {
        let roster = vec![Employee::manager("Bento Albino", 3, 2014).unwrap()];
        assert!(top_bonus_earner(&roster, &december_2021(), &december_sales()).is_none());
    }

    #[test]
    fn test_negative_bonus_never_wins() {
        // Hired after the period: 1000 x -12 + 1400 < 0
        let roster = vec![Employee::secretary("Future Hire", 12, 2022).unwrap()];
        assert!(top_bonus_earner(&roster, &december_2021(), &SalesByName::new()).is_none());
    }

    #[test]
    fn test_top_seller_skips_non_salespeople() {
        let roster = vec![
            Employee::manager("Bento Albino", 3, 2014).unwrap(),
            Employee::salesperson("João Mendes", 12, 2021).unwrap(),
        ];
        let mut sales = SalesByName::new();
        sales.record("Bento Albino", dec("9000")).unwrap();
        sales.record("João Mendes", dec("3400")).unwrap();

        assert_eq!(top_seller(&roster, &sales).unwrap().name, "João Mendes");
    }

    #[test]
    fn test_empty_roster_has_no_winner() {
        let period = december_2021();
        let sales = SalesByName::new();

        assert!(top_earner(&[], &period, &sales).is_none());
        assert!(top_bonus_earner(&[], &period, &sales).is_none());
        assert!(top_seller(&[], &sales).is_none());
    }

    #[test]
    fn test_leader_reports_winning_value() {
        let roster = create_roster();
        let (employee, value) = leader(
            roster
                .iter()
                .map(|e| (e, december_sales().amount_for(&e.name))),
        )
        .unwrap();

        assert_eq!(employee.name, "Ana Silva");
        assert_eq!(value, dec("5200"));
    }
}
