use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal to the invocation; main maps any variant to a
/// stderr message and a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Configuration(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(anyhow::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
