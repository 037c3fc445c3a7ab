//! Common test utilities for rbac-store
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{TestDatabase, fixtures::PermissionFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let rbac = db.system();
//!     // ...
//! }
//! ```


// Re-export commonly used items
pub use cache::{FailingCache, RecordingCache};
pub use database::TestDatabase;
pub use fixtures::PermissionFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
