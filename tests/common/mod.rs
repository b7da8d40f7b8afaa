//! Common test utilities for postsweep integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated site root and home directory, plus CLI helpers
//! - Fixtures: Reusable post content and timestamps

pub mod env;

pub use env::*;
pub use fixtures::*;
