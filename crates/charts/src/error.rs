use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create chart output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render chart: {0}")]
    Render(String),
}
