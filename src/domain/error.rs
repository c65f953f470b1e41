//! # Domain Error
//!
//! ドメイン層とアプリケーション層で共通のエラー型

use thiserror::Error;

/// ドメインエラー
///
/// 呼び出し元がエラーの種類で分岐できるように、種類ごとにバリアントを分ける
#[derive(Debug, Error)]
pub enum DomainError {
    /// プリミティブ値がバリューオブジェクトの制約を満たさない
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// 同じIDのユーザーが既に登録されている
    #[error("user already exists: {0}")]
    AlreadyExists(String),

    /// 更新対象のユーザーが存在しない
    #[error("user not found: {0}")]
    NotFound(String),

    /// リポジトリ（永続化）のエラー
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl DomainError {
    /// `InvalidInput` を作成するヘルパー
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// ドメイン層の Result 型
pub type DomainResult<T> = std::result::Result<T, DomainError>;
