//! # User Data DTO
//!
//! `User` の読み取り専用プロジェクション

use serde::Serialize;

use crate::domain::entities::User;

/// ユーザーデータ
///
/// ドメインオブジェクトを外に漏らさないよう、プリミティブな文字列のみを持つ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    id: String,
    name: String,
}

impl UserData {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
        }
    }
}
