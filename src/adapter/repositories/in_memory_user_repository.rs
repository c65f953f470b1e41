//! In-Memory User Repository Implementation
//!
//! UserRepositoryのメモリ内実装（テストと対話シェル用）

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::UserId;

/// IDをキーにしたメモリ内のユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されているユーザー数
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.users
            .lock()
            .await
            .insert(user.id().clone(), user.clone());
        debug!("Stored user {} in memory", user.id());
        Ok(())
    }

    async fn delete(&self, user: &User) -> Result<()> {
        self.users.lock().await.remove(user.id());
        Ok(())
    }
}
