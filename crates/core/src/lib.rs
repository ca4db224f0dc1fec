//! Domain layer for versioned knowledge topics.
//!
//! Holds the entity types, the error taxonomy, the version factory, the
//! storage traits and the lifecycle service. Has no database dependency, so
//! it can be reused by the API, the db crate and tests alike.

pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod topic;
pub mod tree;
pub mod types;
pub mod validation;
pub mod versioning;
