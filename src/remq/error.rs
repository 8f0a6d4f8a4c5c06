use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("list not found: {0}")]
    ListNotFound(String),

    #[error("reminder not found: {0}")]
    ReminderNotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RemError>;
