//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive clones; the MongoDB
/// client and database handles share one connection pool internally),
/// providing access to:
/// - Application configuration
/// - The MongoDB client (for health checks)
/// - The MongoDB database handle (for repositories)
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, kept for readiness pings
    pub client: database::mongodb::Client,
    /// MongoDB database handle the repositories are built from
    pub db: database::mongodb::Database,
}
