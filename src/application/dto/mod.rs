//! # Data Transfer Objects
//!
//! ドメイン外の呼び出し元へ返す読み取り専用データ

pub mod user_data;

pub use user_data::UserData;
