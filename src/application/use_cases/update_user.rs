//! # Update User Use Case
//!
//! ユーザー更新ユースケース

use std::sync::Arc;

use log::info;

use crate::application::commands::UserUpdateCommand;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::{UserId, UserName};

/// ユーザー更新ユースケース
pub struct UpdateUserUseCase<R: UserRepository + ?Sized> {
    user_repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UpdateUserUseCase<R> {
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// ユーザーを更新する
    ///
    /// 名前が指定されていない場合も、読み込んだユーザーをそのまま保存し直す
    ///
    /// # Errors
    ///
    /// - IDまたは新しい名前が不正: `DomainError::InvalidInput`
    /// - ユーザーが存在しない: `DomainError::NotFound`
    /// - リポジトリの失敗: `DomainError::Repository`
    pub async fn execute(&self, command: UserUpdateCommand) -> DomainResult<()> {
        let target_id = UserId::new(command.id)?;
        let mut user = self
            .user_repository
            .find(&target_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(target_id.to_string()))?;

        if let Some(name) = command.name {
            user.change_name(UserName::new(name)?);
        }

        self.user_repository.save(&user).await?;
        info!("Updated user {} ({})", user.id(), user.name());

        Ok(())
    }
}
