//! # User Repository Trait
//!
//! ユーザーの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::User;
use crate::domain::value_objects::UserId;

/// ユーザーリポジトリ
///
/// ユーザー集約の取得・保存・削除を担当するリポジトリ。
/// 個々の操作はアトミックだが、複数の操作をまたぐトランザクションは提供しない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// IDでユーザーを検索する
    ///
    /// # Returns
    ///
    /// 見つかった場合は `Some(User)`、存在しない場合は `None`
    ///
    /// # Errors
    ///
    /// ストレージの読み込みに失敗した場合にエラーを返す
    async fn find(&self, id: &UserId) -> Result<Option<User>>;

    /// ユーザーを保存する（同じIDがあれば上書き）
    ///
    /// # Errors
    ///
    /// ストレージの書き込みに失敗した場合にエラーを返す
    async fn save(&self, user: &User) -> Result<()>;

    /// ユーザーを削除する
    ///
    /// 存在しないIDの削除は何もしない
    ///
    /// # Errors
    ///
    /// ストレージの書き込みに失敗した場合にエラーを返す
    async fn delete(&self, user: &User) -> Result<()>;
}
