//! # Driver Layer (Presentation)
//!
//! CLIや対話シェルなどの外部インターフェースを提供
//!
//! ## 特徴
//!
//! - アプリケーションサービスを呼び出してユースケースを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **app**: 依存関係の組み立てとコマンドの実行
//! - **shell**: 対話シェルの行パース

pub mod app;
pub mod cli;
pub mod shell;

pub use app::UserRegistryApp;
pub use cli::{Args, Command};
