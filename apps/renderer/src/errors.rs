use thiserror::Error;

/// Boundary error type for the driver binary.
///
/// The core never fails: malformed record fields coerce to defaults and
/// unknown template identifiers fall back to the default layout. Errors only
/// arise at the boundary, reading the record file and decoding its JSON.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read CV record: {0}")]
    Io(#[from] std::io::Error),

    #[error("CV record is not valid JSON: {0}")]
    Record(#[from] serde_json::Error),
}
