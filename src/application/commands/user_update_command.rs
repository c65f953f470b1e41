//! # User Update Command
//!
//! ユーザー更新の入力

/// ユーザー更新コマンド
#[derive(Debug, Clone)]
pub struct UserUpdateCommand {
    /// 更新対象のユーザーID
    pub id: String,
    /// 新しいユーザー名（`None` の場合は変更しない）
    pub name: Option<String>,
}

impl UserUpdateCommand {
    pub fn new(id: String, name: Option<String>) -> Self {
        Self { id, name }
    }
}
