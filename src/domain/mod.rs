//! # Domain Layer
//!
//! このモジュールはユーザー登録のビジネスルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - 永続化の方式について何も知らない
//! - 不正な値を持つオブジェクトは生成できない
//!
//! ## 構成要素
//!
//! - **error**: ドメインエラー
//! - **value_objects**: バリューオブジェクト（UserId, UserNameなど）
//! - **entities**: エンティティ（User）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ビジネスルール）

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
pub mod value_objects;
