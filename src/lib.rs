//! # User Registry
//!
//! ユーザー登録を題材にしたドメイン駆動設計のレイヤー構成
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: バリューオブジェクト、エンティティ、Repository trait、ドメインサービス
//! - **Application層**: コマンド、DTO、ユースケース、アプリケーションサービス
//! - **Adapter層**: 設定ファイルとリポジトリの実装（メモリ、JSONファイル）
//! - **Driver層**: CLI/対話シェル、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
