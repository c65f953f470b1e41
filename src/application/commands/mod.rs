//! # Commands
//!
//! アプリケーション境界を越える入力データ

pub mod user_delete_command;
pub mod user_register_command;
pub mod user_update_command;

pub use user_delete_command::UserDeleteCommand;
pub use user_register_command::UserRegisterCommand;
pub use user_update_command::UserUpdateCommand;
