//! Pipeline I/O abstraction layer
//!
//! This module provides a trait-based abstraction over the key/value
//! input/output interface of the surrounding CI pipeline, allowing for a
//! real environment-backed implementation and a mock for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [ActionsKit] trait. The concrete
//! implementations include:
//!
//! - [env::EnvKit]: the real implementation, following GitHub Actions
//!   runner conventions (`INPUT_*` variables, `GITHUB_OUTPUT` file,
//!   workflow commands)
//! - [mock::MockKit]: a recording implementation for tests
//!
//! Most code should depend on the trait rather than a concrete type, so
//! the derivation logic stays testable without a runner environment.

pub mod env;
pub mod mock;

pub use env::EnvKit;
pub use mock::MockKit;

use crate::error::Result;

/// Key/value interface to the surrounding pipeline.
///
/// The core reads one named input, one ambient revision fact, and writes
/// named outputs. Each method maps to a single external interaction with
/// no retry policy; any failure aborts the invocation.
pub trait ActionsKit: Send + Sync {
    /// Read a named input. Blank values count as absent.
    fn get_input(&self, name: &str) -> Option<String>;

    /// Short identifier of the revision being built.
    fn abbreviated_sha(&self) -> Result<String>;

    /// Publish a named output.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;

    /// Emit a debug trace line.
    fn debug(&self, message: &str);
}
