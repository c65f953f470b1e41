//! # FullName Value Object
//!
//! 姓と名

/// 氏名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    last_name: String,
    first_name: String,
}

impl FullName {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    /// 姓
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// 名
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
}
