//! # Application Services
//!
//! 複数のユースケースを1つの窓口にまとめたアプリケーションサービス

pub mod user_application_service;

pub use user_application_service::UserApplicationService;
