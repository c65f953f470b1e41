//! # Register User Use Case
//!
//! ユーザー登録ユースケース

use std::sync::Arc;

use log::info;

use crate::application::commands::UserRegisterCommand;
use crate::domain::entities::User;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::UserRepository;
use crate::domain::services::UserService;
use crate::domain::value_objects::{UserId, UserName};

/// ユーザー登録ユースケース
///
/// 重複確認と保存は別々のリポジトリ操作のため、同じIDでの同時登録は
/// 両方とも重複確認を通過し、後から保存した方が残る。
pub struct RegisterUserUseCase<R: UserRepository + ?Sized> {
    user_service: Arc<UserService<R>>,
    user_repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> RegisterUserUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `user_service` - ユーザードメインサービス
    /// * `user_repository` - ユーザーリポジトリ
    pub fn new(user_service: Arc<UserService<R>>, user_repository: Arc<R>) -> Self {
        Self {
            user_service,
            user_repository,
        }
    }

    /// ユーザーを登録する
    ///
    /// `mail_address` は受け取るが使用しない
    ///
    /// # Errors
    ///
    /// - IDまたは名前が不正（名前の未指定を含む）: `DomainError::InvalidInput`
    /// - 同じIDのユーザーが存在する: `DomainError::AlreadyExists`
    /// - リポジトリの失敗: `DomainError::Repository`
    pub async fn execute(&self, command: UserRegisterCommand) -> DomainResult<()> {
        let id = UserId::new(command.id)?;
        let name = command
            .name
            .ok_or_else(|| DomainError::invalid_input("user name", "is required"))?;
        let user = User::new(id, UserName::new(name)?);

        if self.user_service.exists(&user).await? {
            return Err(DomainError::AlreadyExists(user.id().to_string()));
        }

        self.user_repository.save(&user).await?;
        info!("Registered user {} ({})", user.id(), user.name());

        Ok(())
    }
}
