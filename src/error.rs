use thiserror::Error;

/// Main error type for RAGMetrics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Missing or empty expected/retrieved ids
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Metric name not known to the registry
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using MetricsError
pub type Result<T> = std::result::Result<T, MetricsError>;
