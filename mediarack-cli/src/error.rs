use thiserror::Error;

use mediarack_catalog::CatalogError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog operation failed (bad score, missing file, I/O)
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// A lookup by title found nothing
    #[error("{0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
