//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Renderer and request fixtures
//! - A mock SSR sidecar
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod fixtures;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_ssr::*;
