//! # Money Value Object
//!
//! 金額と通貨の組

use crate::domain::error::{DomainError, DomainResult};

/// お金
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    amount: f64,
    currency: String,
}

impl Money {
    /// # Arguments
    ///
    /// * `amount` - 金額
    /// * `currency` - 通貨（例: "JPY"）
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// 加算した新しい `Money` を返す
    ///
    /// # Errors
    ///
    /// 通貨が異なる場合に `DomainError::InvalidInput` を返す
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::invalid_input(
                "currency",
                format!("cannot add {} to {}", other.currency, self.currency),
            ));
        }

        Ok(Money::new(self.amount + other.amount, self.currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_currency() {
        let money = Money::new(100.0, "JPY");
        let target = Money::new(200.0, "JPY");

        let added = money.add(&target).unwrap();

        assert_eq!(added.amount(), 300.0);
        assert_eq!(added.currency(), "JPY");
        // 元の値は変わらない
        assert_eq!(money.amount(), 100.0);
    }

    #[test]
    fn test_add_different_currency() {
        let money = Money::new(100.0, "JPY");
        let target = Money::new(200.0, "USD");

        let err = money.add(&target).unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidInput {
                field: "currency",
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid currency: cannot add USD to JPY");
    }
}
