//! Shared utilities for the CCL facts tooling

pub mod error;

pub use error::{AsCclError, CclError, Context};
