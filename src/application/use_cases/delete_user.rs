//! # Delete User Use Case
//!
//! ユーザー削除ユースケース

use std::sync::Arc;

use log::{debug, info};

use crate::application::commands::UserDeleteCommand;
use crate::domain::error::DomainResult;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::UserId;

/// ユーザー削除ユースケース
pub struct DeleteUserUseCase<R: UserRepository + ?Sized> {
    user_repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> DeleteUserUseCase<R> {
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// ユーザーを削除する
    ///
    /// 対象が存在しない場合は何もせず成功する
    ///
    /// # Errors
    ///
    /// IDが空の場合に `DomainError::InvalidInput` を返す
    pub async fn execute(&self, command: UserDeleteCommand) -> DomainResult<()> {
        let target_id = UserId::new(command.id)?;
        let Some(user) = self.user_repository.find(&target_id).await? else {
            debug!("User {} not found, nothing to delete", target_id);
            return Ok(());
        };

        self.user_repository.delete(&user).await?;
        info!("Deleted user {}", user.id());

        Ok(())
    }
}
