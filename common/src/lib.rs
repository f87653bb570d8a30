//! Common utilities shared across the receipt processing workspace
//!
//! This crate provides shared functionality used by the `processing` library
//! and the `receipts` application:
//!
//! - Configuration types and loading
//! - Build-time YAML include resolution
//! - Shared test utilities (feature `test-helpers`)

pub mod config;
pub mod yaml_include;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{TestError, TestResult, generate_unique_id};
