//! # User Delete Command
//!
//! ユーザー削除の入力

/// ユーザー削除コマンド
#[derive(Debug, Clone)]
pub struct UserDeleteCommand {
    /// 削除対象のユーザーID
    pub id: String,
}

impl UserDeleteCommand {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
