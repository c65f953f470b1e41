//! # UserId Value Object
//!
//! ユーザーIDのバリューオブジェクト

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// ユーザーID
///
/// 空文字列は許可しない。生成後は変更できない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// 新しいユーザーIDを作成
    ///
    /// # Errors
    ///
    /// 値が空文字列の場合に `DomainError::InvalidInput` を返す
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_input("user id", "must not be empty"));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
