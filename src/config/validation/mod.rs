//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `storage_validators`: Database and Redis validators
//! - `cache_validators`: Cache and logging validators
//! - `tests`: Test suite for all validators

mod cache_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
