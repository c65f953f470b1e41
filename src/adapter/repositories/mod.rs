//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod in_memory_user_repository;
pub mod json_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use json_user_repository::JsonUserRepository;
