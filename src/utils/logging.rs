//! Logging setup for binaries.
//!
//! The library only emits `tracing` events; a binary decides where they go
//! by installing a subscriber once at startup.

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Install a compact `fmt` subscriber at INFO level as the global default.
///
/// Fails if a global subscriber is already set.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
