//! Public API for the speck-removal crate.
//!
//! This module provides the high-level API: the [`SpeckRemover`] builder and
//! the [`SpeckError`] unified error type.

mod builder;
mod error;

pub use builder::{SpeckRemoval, SpeckRemover};
pub use error::SpeckError;
