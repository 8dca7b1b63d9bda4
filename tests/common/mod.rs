//! Common test utilities for policy-export contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated policy repository plus staging root
//! - Assertion helpers: `assert_exported!`, `snapshot_tree`, etc.
//! - Fixtures: Reusable lock and cookbook content

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
