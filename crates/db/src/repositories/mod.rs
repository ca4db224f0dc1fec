//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&SqlitePool` as the first argument and return raw `sqlx` results.

pub mod resource_repo;
pub mod topic_repo;

pub use resource_repo::ResourceRepo;
pub use topic_repo::TopicRepo;
