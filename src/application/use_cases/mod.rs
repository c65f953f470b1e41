//! # Use Cases
//!
//! アプリケーションのビジネスフロー（単一目的のユースケース）
//!
//! ## ユースケース
//!
//! - **RegisterUserUseCase**: ユーザー登録
//! - **GetUserUseCase**: ユーザー取得
//! - **UpdateUserUseCase**: ユーザー更新
//! - **DeleteUserUseCase**: ユーザー削除

pub mod delete_user;
pub mod get_user;
pub mod register_user;
pub mod update_user;

pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use register_user::RegisterUserUseCase;
pub use update_user::UpdateUserUseCase;
