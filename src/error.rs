use thiserror::Error;

/// Failures talking to one of the remote APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API responded with error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse URL: {0}")]
    UrlParsingFailed(#[from] url::ParseError),

    #[error("Upload session was not started, response had no Location header")]
    MissingUploadSession,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row} has columns {found:?}, expected {expected:?}")]
    RowShapeMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("The publisher id must not be empty")]
    EmptyPublisherId,

    #[error("Fetching campaign report failed: {0}")]
    FetchFailed(#[source] ApiError),

    #[error("Exporting campaign report to '{path}' failed: {source}")]
    ExportFailed {
        path: String,
        #[source]
        source: ExportError,
    },

    #[error("Could not read '{path}' for upload: {source}")]
    ReadUploadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Uploading campaign report failed: {0}")]
    UploadFailed(#[source] ApiError),
}
