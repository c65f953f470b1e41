//! # ModelNumber Value Object
//!
//! 製品の型番

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// 型番
///
/// `{製品コード}-{枝番}-{ロット番号}` の形式で表示される
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelNumber {
    product_code: String,
    branch: u32,
    lot: u32,
}

impl ModelNumber {
    /// # Errors
    ///
    /// 製品コードが空、または枝番・ロット番号が0の場合に
    /// `DomainError::InvalidInput` を返す
    pub fn new(product_code: impl Into<String>, branch: u32, lot: u32) -> DomainResult<Self> {
        let product_code = product_code.into();
        if product_code.is_empty() {
            return Err(DomainError::invalid_input("product code", "must not be empty"));
        }
        if branch == 0 {
            return Err(DomainError::invalid_input("branch", "must be positive"));
        }
        if lot == 0 {
            return Err(DomainError::invalid_input("lot", "must be positive"));
        }

        Ok(Self {
            product_code,
            branch,
            lot,
        })
    }
}

impl fmt::Display for ModelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.product_code, self.branch, self.lot)
    }
}
