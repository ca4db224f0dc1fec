//! Row structs for the `topic` and `resource` tables.
//!
//! Each submodule contains a `FromRow` struct matching the table columns and
//! a conversion into the domain entity from `topicforge_core`.

pub mod resource;
pub mod topic;
