//! Error type for a benchmark run.
//!
//! Every variant is fatal to the run: there is no retry and no partial result.

/// Boxed error from an external collaborator (SDK, credential chain, fake store).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Parameters rejected before any configuration or download work.
    #[error("{0}")]
    InvalidInput(String),

    /// Region/credential resolution failed.
    #[error("failed to load config")]
    Configuration(#[source] BoxError),

    /// The download for the given (1-based) iteration failed.
    #[error("download failed on iteration {iteration}")]
    Download {
        iteration: u32,
        #[source]
        source: BoxError,
    },
}

impl BenchError {
    pub fn configuration(message: impl Into<String>) -> Self {
        let message: String = message.into();
        BenchError::Configuration(message.into())
    }
}
