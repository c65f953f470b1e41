//! # Domain Services
//!
//! 単一のエンティティに属さないビジネスルール

pub mod user_service;

pub use user_service::UserService;
