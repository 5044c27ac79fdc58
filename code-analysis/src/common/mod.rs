//! Common utilities module
//!
//! Shared helpers used across the code-analysis crate.

/// Environment variable loading utilities
pub mod env_loader;

pub use env_loader::{load_env_list, load_env_string, EnvLoader};
