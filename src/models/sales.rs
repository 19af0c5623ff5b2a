//! Sales figures for a reporting period.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Sales amounts keyed by employee name for one reporting period.
///
/// Names without an entry have sold nothing; lookups never fail.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalesByName;
/// use rust_decimal::Decimal;
///
/// let mut sales = SalesByName::new();
/// sales.record("Ana Silva", Decimal::new(5200, 0)).unwrap();
///
/// assert_eq!(sales.amount_for("Ana Silva"), Decimal::new(5200, 0));
/// assert_eq!(sales.amount_for("Bento Albino"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesByName {
    amounts: HashMap<String, Decimal>,
}

impl SalesByName {
    /// Creates an empty sales table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the sales amount for a name, replacing any previous figure.
    ///
    /// Negative amounts are rejected with [`EngineError::NegativeSales`].
    pub fn record(&mut self, name: impl Into<String>, amount: Decimal) -> EngineResult<()> {
        let name = name.into();
        if amount < Decimal::ZERO {
            return Err(EngineError::NegativeSales { name, amount });
        }
        self.amounts.insert(name, amount);
        Ok(())
    }

    /// Returns the sales amount for a name, or zero when none was recorded.
    pub fn amount_for(&self, name: &str) -> Decimal {
        self.amounts.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    /// Checks that no recorded amount is negative.
    pub fn validate(&self) -> EngineResult<()> {
        match self
            .amounts
            .iter()
            .find(|(_, amount)| **amount < Decimal::ZERO)
        {
            Some((name, amount)) => Err(EngineError::NegativeSales {
                name: name.clone(),
                amount: *amount,
            }),
            None => Ok(()),
        }
    }

    /// Returns the number of names with a recorded amount.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no sales were recorded.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_absent_name_defaults_to_zero() {
        let sales = SalesByName::new();
        assert_eq!(sales.amount_for("Juliana Alves"), Decimal::ZERO);
    }

    #[test]
    fn test_record_replaces_previous_amount() {
        let mut sales = SalesByName::new();
        sales.record("Ana Silva", dec("100")).unwrap();
        sales.record("Ana Silva", dec("5200.00")).unwrap();

        assert_eq!(sales.amount_for("Ana Silva"), dec("5200"));
        assert_eq!(sales.len(), 1);
    }

    #[test]
    fn test_record_rejects_negative_amount() {
        let mut sales = SalesByName::new();
        let result = sales.record("Ana Silva", dec("-0.01"));

        match result.unwrap_err() {
            EngineError::NegativeSales { name, amount } => {
                assert_eq!(name, "Ana Silva");
                assert_eq!(amount, dec("-0.01"));
            }
            other => panic!("Expected NegativeSales, got {:?}", other),
        }
        assert!(sales.is_empty());
    }

    #[test]
    fn test_record_accepts_zero() {
        let mut sales = SalesByName::new();
        sales.record("João Mendes", Decimal::ZERO).unwrap();
        assert_eq!(sales.amount_for("João Mendes"), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_as_plain_map() {
        let yaml = "Ana Silva: \"5200.00\"\nJoão Mendes: \"3400.00\"\n";
        let sales: SalesByName = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(sales.amount_for("Ana Silva"), dec("5200"));
        assert_eq!(sales.amount_for("João Mendes"), dec("3400"));
        assert!(sales.validate().is_ok());
    }

    #[test]
    fn test_validate_flags_deserialized_negative() {
        let sales: SalesByName = serde_yaml::from_str("Ana Silva: \"-5\"\n").unwrap();
        assert!(matches!(
            sales.validate(),
            Err(EngineError::NegativeSales { .. })
        ));
    }
}
