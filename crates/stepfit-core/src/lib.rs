//! Core types shared by the stepfit crates
//!
//! This crate provides the unified error type used across the workspace and
//! the small numeric helpers (sample mean, counter preprocessing) that the
//! segmentation and approximation crates build on.

pub mod error;
pub mod stats;

pub use error::{Error, Result};
pub use stats::{counter_deltas, mean};
