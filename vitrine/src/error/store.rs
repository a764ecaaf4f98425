//! Theme store error types

/// Errors reading or writing the stored theme preference.
#[derive(Debug, thiserror::Error)]
pub enum ThemeStoreError {
    /// Storage is not available in this environment.
    #[error("Theme storage is not available")]
    Unavailable,

    /// The backing file could not be read or written.
    #[error("Theme storage IO error: {0}")]
    Io(#[from] std::io::Error),
}
