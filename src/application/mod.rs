//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 1つの操作は「検証 → 存在確認 → 永続化」の短いトランザクションスクリプト
//!
//! ## 構成要素
//!
//! - **commands**: ユースケースへの入力
//! - **dto**: Data Transfer Object（ユースケースからの出力）
//! - **use_cases**: 単一目的のユースケース
//! - **services**: 全ユースケースをまとめたアプリケーションサービス

pub mod commands;
pub mod dto;
pub mod services;
pub mod use_cases;
