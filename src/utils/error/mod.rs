//! Error handling utilities
//!
//! This module defines the error type shared by the store, cache and repository layers.

pub mod error;

pub use error::*;
