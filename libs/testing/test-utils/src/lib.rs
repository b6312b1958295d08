//! Shared test utilities for domain testing
//!
//! Provides `TestDatabase`: a throwaway PostgreSQL container with the
//! full migration set (schema + item seed) applied, ready for
//! repository-level integration tests.
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! // Pass db.connection() to your repository
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;
