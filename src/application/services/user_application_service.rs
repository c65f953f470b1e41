//! # User Application Service
//!
//! ユーザーの登録・取得・更新・削除をまとめたアプリケーションサービス

use std::sync::Arc;

use crate::application::commands::{UserDeleteCommand, UserRegisterCommand, UserUpdateCommand};
use crate::application::dto::UserData;
use crate::application::use_cases::{
    DeleteUserUseCase, GetUserUseCase, RegisterUserUseCase, UpdateUserUseCase,
};
use crate::domain::entities::User;
use crate::domain::error::DomainResult;
use crate::domain::repositories::UserRepository;
use crate::domain::services::UserService;

/// ユーザーアプリケーションサービス
///
/// 各操作は対応するユースケースに委譲する。依存はすべてコンストラクタで受け取る。
pub struct UserApplicationService<R: UserRepository + ?Sized> {
    user_service: Arc<UserService<R>>,
    register_use_case: RegisterUserUseCase<R>,
    get_use_case: GetUserUseCase<R>,
    update_use_case: UpdateUserUseCase<R>,
    delete_use_case: DeleteUserUseCase<R>,
}

impl<R: UserRepository + ?Sized> UserApplicationService<R> {
    /// 新しいアプリケーションサービスを作成
    ///
    /// # Arguments
    ///
    /// * `user_service` - ユーザードメインサービス
    /// * `user_repository` - ユーザーリポジトリ
    pub fn new(user_service: Arc<UserService<R>>, user_repository: Arc<R>) -> Self {
        Self {
            register_use_case: RegisterUserUseCase::new(
                user_service.clone(),
                user_repository.clone(),
            ),
            get_use_case: GetUserUseCase::new(user_repository.clone()),
            update_use_case: UpdateUserUseCase::new(user_repository.clone()),
            delete_use_case: DeleteUserUseCase::new(user_repository),
            user_service,
        }
    }

    /// ユーザーを登録する
    pub async fn register(&self, command: UserRegisterCommand) -> DomainResult<()> {
        self.register_use_case.execute(command).await
    }

    /// ユーザーを取得する（存在しない場合は `None`）
    pub async fn get(&self, user_id: &str) -> DomainResult<Option<UserData>> {
        self.get_use_case.execute(user_id).await
    }

    /// ユーザーを更新する
    pub async fn update(&self, command: UserUpdateCommand) -> DomainResult<()> {
        self.update_use_case.execute(command).await
    }

    /// ユーザーを削除する（存在しない場合は何もしない）
    pub async fn delete(&self, command: UserDeleteCommand) -> DomainResult<()> {
        self.delete_use_case.execute(command).await
    }

    /// 同じIDのユーザーが既に存在するかを確認する
    pub async fn exists(&self, user: &User) -> DomainResult<bool> {
        self.user_service.exists(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::repositories::user_repository::MockUserRepository;
    use crate::domain::value_objects::{UserId, UserName};

    fn create_service(mock_repo: MockUserRepository) -> UserApplicationService<MockUserRepository> {
        let repo = Arc::new(mock_repo);
        let user_service = Arc::new(UserService::new(repo.clone()));
        UserApplicationService::new(user_service, repo)
    }

    #[tokio::test]
    async fn test_register_delegates_to_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().times(1).returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let service = create_service(mock_repo);

        let command = UserRegisterCommand::new("u1".to_string(), Some("Alice".to_string()), None);
        assert!(service.register(command).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|_| Ok(None));

        let service = create_service(mock_repo);

        let command = UserUpdateCommand::new("missing".to_string(), Some("Xavier".to_string()));
        let result = service.update(command).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_exists() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find().returning(|id| {
            Ok(Some(User::new(id.clone(), UserName::new("Alice").unwrap())))
        });

        let service = create_service(mock_repo);

        let user = User::new(UserId::new("u1").unwrap(), UserName::new("Alice").unwrap());
        assert!(service.exists(&user).await.unwrap());
    }
}
