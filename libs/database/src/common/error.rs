/// Unified database error type
///
/// Connection retry reports errors through SeaORM's `DbErr`; this type
/// covers the failures the crate raises itself.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}
