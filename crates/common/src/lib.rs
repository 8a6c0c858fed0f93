//! Shared utilities for the StudyHub backend
//!
//! Common error handling and configuration used across all domain crates.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
