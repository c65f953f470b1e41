//! # User Service
//!
//! ユーザーの重複確認を行うドメインサービス

use std::sync::Arc;

use log::debug;

use crate::domain::entities::User;
use crate::domain::error::DomainResult;
use crate::domain::repositories::UserRepository;

/// ユーザードメインサービス
///
/// 状態を持たず、リポジトリ経由でのみユーザーを参照する
pub struct UserService<R: UserRepository + ?Sized> {
    user_repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// # Arguments
    ///
    /// * `user_repository` - ユーザーリポジトリ
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// 同じIDのユーザーが既に存在するかを確認する
    ///
    /// # Errors
    ///
    /// リポジトリの読み込みに失敗した場合にエラーを返す
    pub async fn exists(&self, user: &User) -> DomainResult<bool> {
        let found = self.user_repository.find(user.id()).await?;
        debug!("User {} exists: {}", user.id(), found.is_some());

        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::repositories::user_repository::MockUserRepository;
    use crate::domain::value_objects::{UserId, UserName};
    use mockall::predicate::eq;

    fn create_test_user(id: &str) -> User {
        User::new(UserId::new(id).unwrap(), UserName::new("hogehoge").unwrap())
    }

    #[tokio::test]
    async fn test_exists_when_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find()
            .with(eq(UserId::new("hoge").unwrap()))
            .times(1)
            .returning(|_| Ok(Some(create_test_user("hoge"))));

        let service = UserService::new(Arc::new(mock_repo));

        let exists = service.exists(&create_test_user("hoge")).await.unwrap();
        assert!(exists);
    }

    #[tokio::test]
    async fn test_exists_when_absent() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let exists = service.exists(&create_test_user("hoge")).await.unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_exists_propagates_repository_error() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find()
            .returning(|_| Err(anyhow::anyhow!("storage unavailable")));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.exists(&create_test_user("hoge")).await;
        assert!(matches!(result, Err(DomainError::Repository(_))));
    }
}
