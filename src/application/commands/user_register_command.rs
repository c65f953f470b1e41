//! # User Register Command
//!
//! ユーザー登録の入力

/// ユーザー登録コマンド
#[derive(Debug, Clone)]
pub struct UserRegisterCommand {
    /// ユーザーID
    pub id: String,
    /// ユーザー名（未指定の場合は登録時に検証エラー）
    pub name: Option<String>,
    /// メールアドレス（受け取るだけで検証・保存はしない）
    pub mail_address: Option<String>,
}

impl UserRegisterCommand {
    /// 新しい登録コマンドを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use user_registry::application::commands::UserRegisterCommand;
    ///
    /// let command = UserRegisterCommand::new(
    ///     "u1".to_string(),
    ///     Some("Alice".to_string()),
    ///     Some("alice@example.com".to_string()),
    /// );
    ///
    /// assert_eq!(command.id, "u1");
    /// assert_eq!(command.name.as_deref(), Some("Alice"));
    /// ```
    pub fn new(id: String, name: Option<String>, mail_address: Option<String>) -> Self {
        Self {
            id,
            name,
            mail_address,
        }
    }
}
