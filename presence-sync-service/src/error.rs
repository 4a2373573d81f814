pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("envy error: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("serde_json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    CacheError(#[from] cache::CacheError),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("frame is missing field {0}")]
    MissingField(&'static str),

    #[cfg(feature = "metrics")]
    #[error("prometheus error: {0}")]
    PrometheusError(#[from] prometheus::Error),
}
