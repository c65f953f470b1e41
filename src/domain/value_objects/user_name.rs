//! # UserName Value Object
//!
//! ユーザー名のバリューオブジェクト

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// ユーザー名の最小文字数
pub const MIN_USER_NAME_LENGTH: usize = 3;

/// ユーザー名
///
/// 3文字以上。文字数はバイト数ではなく文字（Unicodeスカラー値）で数える。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// 新しいユーザー名を作成
    ///
    /// # Errors
    ///
    /// 3文字未満の場合に `DomainError::InvalidInput` を返す
    ///
    /// # 例
    ///
    /// ```
    /// use user_registry::domain::value_objects::UserName;
    ///
    /// assert!(UserName::new("abc").is_ok());
    /// assert!(UserName::new("ab").is_err());
    ///
    /// // マルチバイト文字も1文字として数える
    /// assert!(UserName::new("山田太").is_ok());
    /// assert!(UserName::new("山田").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < MIN_USER_NAME_LENGTH {
            return Err(DomainError::invalid_input(
                "user name",
                format!("must be at least {} characters", MIN_USER_NAME_LENGTH),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
