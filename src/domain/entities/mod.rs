//! # Domain Entities
//!
//! ビジネスエンティティを定義するモジュール
//!
//! ## エンティティ
//!
//! - **User**: ユーザー集約のルート

pub mod user;

pub use user::User;
