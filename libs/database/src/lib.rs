//! Database library providing the PostgreSQL connector and utilities.
//!
//! This library provides a unified interface for connecting to and managing
//! PostgreSQL connections with SeaORM: pool configuration from the
//! environment, connection retry with exponential backoff, migration
//! running, and health checks.
//!
//! # Examples
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use my_app::migrator::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "my_app").await?;
//! ```

pub mod common;
pub mod postgres;

// Re-exports for convenience
pub use common::DatabaseError;
