//! chores-core
//!
//! Core building blocks for the chores task runner.
//!
//! - **config**: typed access to a task's loosely-typed configuration
//!   document (`TaskConfig`, `ConfigValue`, the diagnostic formatter)
//! - **manifest**: loads the YAML manifest and turns its `up:` entries
//!   into task configs
//! - **registry**: `TaskHandler` trait, handler registry, and the runner
//! - **executor**: synchronous process execution with accurate exit codes

pub mod config;
pub mod error;
pub mod executor;
pub mod manifest;
pub mod registry;
