//! # Get User Use Case
//!
//! ユーザー取得ユースケース

use std::sync::Arc;

use log::debug;

use crate::application::dto::UserData;
use crate::domain::error::DomainResult;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::UserId;

/// ユーザー取得ユースケース
pub struct GetUserUseCase<R: UserRepository + ?Sized> {
    user_repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> GetUserUseCase<R> {
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// ユーザーを取得する
    ///
    /// # Returns
    ///
    /// 見つかった場合は `Some(UserData)`。存在しないことはエラーではなく `None`
    ///
    /// # Errors
    ///
    /// IDが空の場合に `DomainError::InvalidInput` を返す
    pub async fn execute(&self, user_id: &str) -> DomainResult<Option<UserData>> {
        let target = UserId::new(user_id)?;
        let user = self.user_repository.find(&target).await?;
        debug!("Looked up user {}: found={}", target, user.is_some());

        Ok(user.as_ref().map(UserData::from))
    }
}
