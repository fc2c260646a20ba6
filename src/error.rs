use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeymapError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Share Payload Decoding Error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Import Error: {0}")]
    Import(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type KmResult<T> = Result<T, KeymapError>;
