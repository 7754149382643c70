use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("music {0} not found")]
    MusicNotFound(i32),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
