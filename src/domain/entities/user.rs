//! # User Entity
//!
//! ユーザーのドメインエンティティ

use crate::domain::value_objects::{UserId, UserName};

/// ユーザー
///
/// 集約ルート。IDは生成時に一度だけ設定され、名前は `change_name` でのみ変更できる。
/// 同一性はIDのみで判定する。
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// 新しいユーザーを作成
    ///
    /// # Arguments
    ///
    /// * `id` - ユーザーID
    /// * `name` - ユーザー名
    pub fn new(id: UserId, name: UserName) -> Self {
        let mut user = Self {
            id,
            name: name.clone(),
        };
        user.change_name(name);
        user
    }

    /// ユーザー名を変更する
    ///
    /// 検証済みの `UserName` を受け取るため失敗しない
    pub fn change_name(&mut self, name: UserName) {
        self.name = name;
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}
