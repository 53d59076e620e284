use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the hashing engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Job rejected before any I/O: bad block size, unselected algorithm,
    /// empty input list.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Algorithm tag outside the supported set. Reachable only through the
    /// string-parsing path; never silently replaced with a default.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// An input file could not be opened or read. Fatal for the run; digests
    /// already written for earlier files stay in the artifact.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The hash artifact could not be created or written.
    #[error("cannot write hash artifact {}: {source}", .path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Internal early-exit marker for a cancelled run. The orchestrator maps
    /// it to `JobStatus::Cancelled`; `run` never returns it to callers.
    #[error("hashing was cancelled")]
    Cancelled,
}
