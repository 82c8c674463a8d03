use thiserror::Error;

/// Errors the storage crate can actually raise. Queries are total by design
/// (missing entities come back as empty collections or flagged fallbacks, and
/// data-quality findings are logged at the load boundary), so parsing the
/// dataset is the only fallible operation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
