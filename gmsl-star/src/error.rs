/// Error types for the sea level library
use thiserror::Error;

/// Main error type for sea level dataset operations
#[derive(Error, Debug)]
pub enum StarError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Resource body ended inside the metadata preamble
    #[error("Expected {expected} metadata lines before the header, found {found}")]
    MissingPreamble { expected: usize, found: usize },

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// No data rows after the header
    #[error("No data rows found after the header")]
    EmptyTable,

    /// Not enough points to fit a line
    #[error("Insufficient observations for a line fit (needed: {needed}, found: {found})")]
    InsufficientObservations { needed: usize, found: usize },

    /// Every point shares the same time value
    #[error("Cannot fit a line through observations with zero time variance")]
    ConstantTimeAxis,
}

/// Type alias for Results using StarError
pub type Result<T> = std::result::Result<T, StarError>;
