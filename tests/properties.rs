//! Property tests for the pay rules.

use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    base_salary, bonus, top_earner, top_seller, total_base_salaries, total_bonuses, total_pay,
};
use payroll_engine::models::{Employee, EmployeeCategory, ReportingPeriod, SalesByName};

fn category() -> impl Strategy<Value = EmployeeCategory> {
    prop_oneof![
        Just(EmployeeCategory::Secretary),
        Just(EmployeeCategory::Salesperson),
        Just(EmployeeCategory::Manager),
    ]
}

/// Sales in cents, up to one million.
fn sales_amount() -> impl Strategy<Value = Decimal> {
    (0_i64..100_000_000_i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn roster() -> impl Strategy<Value = Vec<(EmployeeCategory, u32, i32, Decimal)>> {
    prop::collection::vec((category(), 1_u32..=12, 1990_i32..2030, sales_amount()), 0..20)
}

fn build(entries: &[(EmployeeCategory, u32, i32, Decimal)]) -> (Vec<Employee>, SalesByName) {
    let mut sales = SalesByName::new();
    let employees = entries
        .iter()
        .enumerate()
        .map(|(i, (category, month, year, amount))| {
            let name = format!("employee_{i}");
            sales.record(name.clone(), *amount).unwrap();
            Employee::new(name, *category, *month, *year).unwrap()
        })
        .collect();
    (employees, sales)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn total_pay_is_base_plus_bonus(
        category in category(),
        sales in sales_amount(),
        tenure in -240_i32..600,
    ) {
        prop_assert_eq!(
            total_pay(category, sales, tenure),
            base_salary(category) + bonus(category, sales, tenure)
        );
    }

    #[test]
    fn manager_bonus_is_always_zero(sales in sales_amount(), tenure in -240_i32..600) {
        prop_assert_eq!(bonus(EmployeeCategory::Manager, sales, tenure), Decimal::ZERO);
    }

    #[test]
    fn secretary_bonus_ignores_sales(sales in sales_amount(), tenure in -240_i32..600) {
        let expected = Decimal::from(1000 * tenure) + Decimal::new(1400, 0);
        prop_assert_eq!(bonus(EmployeeCategory::Secretary, sales, tenure), expected);
    }

    #[test]
    fn new_salesperson_bonus_is_commission(sales in sales_amount()) {
        prop_assert_eq!(
            bonus(EmployeeCategory::Salesperson, sales, 0),
            sales * Decimal::new(3, 1)
        );
    }

    #[test]
    fn absent_sales_default_to_zero(name in "[A-Za-z ]{1,24}") {
        prop_assert_eq!(SalesByName::new().amount_for(&name), Decimal::ZERO);
    }

    #[test]
    fn bonus_filter_matches_unfiltered_sum(entries in roster()) {
        let (employees, sales) = build(&entries);
        let period = ReportingPeriod::new(12, 2021).unwrap();

        let unfiltered: Decimal = employees
            .iter()
            .map(|e| {
                let tenure = payroll_engine::calculation::tenure_months(e, &period);
                bonus(e.category, sales.amount_for(&e.name), tenure)
            })
            .sum();

        prop_assert_eq!(total_bonuses(&employees, &period, &sales), unfiltered);
    }

    #[test]
    fn base_salaries_scale_with_headcount(entries in roster()) {
        let (employees, _) = build(&entries);
        let expected: Decimal = entries.iter().map(|(c, ..)| base_salary(*c)).sum();
        prop_assert_eq!(total_base_salaries(&employees), expected);
    }

    #[test]
    fn top_earner_beats_or_ties_everyone(entries in roster()) {
        let (employees, sales) = build(&entries);
        let period = ReportingPeriod::new(12, 2021).unwrap();
        let pay = |e: &Employee| {
            let tenure = payroll_engine::calculation::tenure_months(e, &period);
            total_pay(e.category, sales.amount_for(&e.name), tenure)
        };

        match top_earner(&employees, &period, &sales) {
            Some(winner) => {
                let best = pay(winner);
                prop_assert!(best > Decimal::ZERO);
                let first_best = employees.iter().position(|e| pay(e) == best).unwrap();
                prop_assert_eq!(&employees[first_best], winner);
                prop_assert!(employees.iter().all(|e| pay(e) <= best));
            }
            None => {
                prop_assert!(employees.iter().all(|e| pay(e) <= Decimal::ZERO));
            }
        }
    }

    #[test]
    fn top_seller_has_positive_sales(entries in roster()) {
        let (employees, sales) = build(&entries);

        if let Some(winner) = top_seller(&employees, &sales) {
            prop_assert!(winner.is_salesperson());
            prop_assert!(sales.amount_for(&winner.name) > Decimal::ZERO);
        }
    }
}
