//! Shared application state passed to request handlers.

/// Cloned per handler; the database connection is a pooled handle, so
/// clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
