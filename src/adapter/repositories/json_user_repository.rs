//! JSON User Repository Implementation
//!
//! UserRepositoryのJSON実装（全ユーザーを1つのJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::domain::value_objects::{UserId, UserName};

/// JSONファイルベースのユーザーリポジトリ
///
/// 操作ごとにファイル全体を読み書きする。同一プロセス内の書き込みはロックで直列化する。
/// 保存は同じディレクトリの一時ファイルに書いてから置き換えるため、読み込み側が
/// 書きかけのファイルを見ることはない。
pub struct JsonUserRepository {
    path: Arc<PathBuf>,
    write_lock: Mutex<()>,
}

/// ユーザーストア（JSON永続化用の内部表現）
#[derive(Debug, Default, Deserialize, Serialize)]
struct UserStoreJson {
    users: Vec<UserRecordJson>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UserRecordJson {
    id: String,
    name: String,
}

impl JsonUserRepository {
    /// 新しいリポジトリを作成
    ///
    /// `~` はホームディレクトリに展開する
    pub fn new(path: &str) -> Self {
        let expanded_path = shellexpand::tilde(path);
        Self {
            path: Arc::new(PathBuf::from(expanded_path.as_ref())),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからストアを読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<UserStoreJson> {
        if !path.exists() {
            debug!(
                "No existing user store found at {}, starting empty",
                path.display()
            );
            return Ok(UserStoreJson::default());
        }

        let content = fs::read_to_string(path).context("Failed to read user store file")?;

        let store: UserStoreJson =
            serde_json::from_str(&content).context("Failed to parse user store JSON")?;

        debug!("Loaded user store: {} users", store.users.len());

        Ok(store)
    }

    /// ファイルにストアを保存する（同期処理）
    fn save_sync(path: &Path, store: &UserStoreJson) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        // Create parent directory if it doesn't exist
        fs::create_dir_all(parent).context("Failed to create user store directory")?;

        let json = serde_json::to_string_pretty(store).context("Failed to serialize user store")?;

        // Write next to the store, then rename over it
        let mut temp_file =
            NamedTempFile::new_in(parent).context("Failed to create temporary user store file")?;
        temp_file
            .write_all(json.as_bytes())
            .context("Failed to write user store file")?;
        temp_file
            .persist(path)
            .context("Failed to replace user store file")?;

        info!("Saved user store: {} users", store.users.len());

        Ok(())
    }

    /// JSON形式からDomain形式に変換
    fn to_domain_user(record: UserRecordJson) -> Result<User> {
        let id = UserId::new(record.id.clone())
            .with_context(|| format!("Invalid user id in store: {:?}", record.id))?;
        let name = UserName::new(record.name)
            .with_context(|| format!("Invalid user name in store for {}", id))?;

        Ok(User::new(id, name))
    }

    /// Domain形式からJSON形式に変換
    fn from_domain_user(user: &User) -> UserRecordJson {
        UserRecordJson {
            id: user.id().to_string(),
            name: user.name().to_string(),
        }
    }

    async fn load(&self) -> Result<UserStoreJson> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn store(&self, store: UserStoreJson) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &store))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn find(&self, id: &UserId) -> Result<Option<User>> {
        let store = self.load().await?;

        store
            .users
            .into_iter()
            .find(|record| record.id == id.as_str())
            .map(Self::to_domain_user)
            .transpose()
    }

    async fn save(&self, user: &User) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await?;
        let record = Self::from_domain_user(user);

        match store.users.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => store.users.push(record),
        }

        self.store(store).await
    }

    async fn delete(&self, user: &User) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await?;
        let before = store.users.len();

        store.users.retain(|r| r.id != user.id().as_str());
        if store.users.len() == before {
            return Ok(());
        }

        self.store(store).await
    }
}
