use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed quote on line {line}: {reason}")]
    InvalidQuoteLine { line: usize, reason: String },

    #[error("failed to read quote feed: {0}")]
    Io(#[from] std::io::Error),
}
