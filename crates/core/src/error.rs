use crate::import::ImportError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Storage error: {0}")]
    Storage(String),
}
