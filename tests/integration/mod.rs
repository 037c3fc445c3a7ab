//! Integration tests for rbac-store
//!
//! These tests drive the repositories against a real, migrated
//! in-memory SQLite store without mocking.

pub mod database_tests;
pub mod permission_tests;
