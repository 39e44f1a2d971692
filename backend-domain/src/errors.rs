use thiserror::Error;

/// Failures of the catalog fetch. Everything except `InvalidOwner` is a
/// remote-source failure and aborts the whole preview or import.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("invalid steam id: {0}")]
    InvalidOwner(String),
    #[error("steam request failed: {0}")]
    RemoteUnavailable(String),
    #[error("steam responded {status}: {body}")]
    RemoteRejected { status: u16, body: String },
    #[error("failed to decode steam inventory: {0}")]
    DecodeFailed(String),
    #[error("steam reported failure (success={success})")]
    RemoteReportedFailure { success: i64 },
}

impl CatalogError {
    pub fn is_input_error(&self) -> bool {
        matches!(self, CatalogError::InvalidOwner(_))
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image download failed: {0}")]
    DownloadFailed(String),
    #[error("image write failed: {0}")]
    WriteFailed(String),
    #[error("image removal failed: {0}")]
    RemoveFailed(String),
}
