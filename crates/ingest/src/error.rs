use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to open sales file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read delimited data: {0}")]
    Csv(#[from] csv::Error),
}
