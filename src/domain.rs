use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Name of the digest list written into the output directory.
pub const ARTIFACT_FILE_NAME: &str = "hashes.hsh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
        }
    }

    /// Digest width in bytes; hex output is twice this.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "MD5" => Ok(HashAlgorithm::Md5),
            "SHA1" => Ok(HashAlgorithm::Sha1),
            "SHA256" => Ok(HashAlgorithm::Sha256),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// One hashing run: which files to read, where the artifact goes, and the
/// block size / algorithm the run was configured with. `algorithm` and
/// `block_size` start unset and are checked by `validate` before any I/O.
#[derive(Debug, Clone)]
pub struct HashJob {
    pub files: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub algorithm: Option<HashAlgorithm>,
    pub block_size: usize,
}

impl HashJob {
    pub fn new(files: Vec<PathBuf>, output_dir: PathBuf) -> Self {
        Self {
            files,
            output_dir,
            algorithm: None,
            block_size: 0,
        }
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(ARTIFACT_FILE_NAME)
    }

    /// Checks the job invariants without touching the filesystem and returns
    /// the validated algorithm and block size.
    pub fn validate(&self) -> Result<(HashAlgorithm, usize)> {
        if self.block_size == 0 {
            return Err(Error::InvalidConfiguration(
                "block size must be a positive number of bytes".to_string(),
            ));
        }
        let algorithm = self.algorithm.ok_or_else(|| {
            Error::InvalidConfiguration("no hash algorithm selected".to_string())
        })?;
        if self.files.is_empty() {
            return Err(Error::InvalidConfiguration(
                "no input files to hash".to_string(),
            ));
        }
        Ok((algorithm, self.block_size))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Completed,
    Cancelled,
    Failed(String),
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Cancelled => write!(f, "cancelled"),
            JobStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub status: JobStatus,
    pub algorithm: HashAlgorithm,
    pub block_size: usize,
    pub files: usize,
    pub digests: u64,
    pub artifact: PathBuf,
    pub elapsed_ms: u64,
}

/// Shared cancellation flag. Cloned into whatever triggers the stop (a
/// Ctrl-C handler, a UI button); the orchestrator polls it between I/O
/// operations. External holders only ever set it; the orchestrator re-arms
/// the flag once a run reaches a terminal state, so one stop request stops
/// at most one run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Clears a consumed stop request so the next run starts fresh. Every
    /// clone of the token sees the cleared state.
    pub(crate) fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_tags_round_trip() {
        for algorithm in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
            assert_eq!(algorithm.as_str().parse::<HashAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn unknown_algorithm_tag_is_rejected() {
        let err = "SHA512".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm(tag) if tag == "SHA512"));
    }

    #[test]
    fn validate_rejects_zero_block_size() {
        let job = HashJob::new(vec![PathBuf::from("a")], PathBuf::from("."))
            .with_algorithm(HashAlgorithm::Md5);
        assert!(matches!(job.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn validate_rejects_missing_algorithm() {
        let job = HashJob::new(vec![PathBuf::from("a")], PathBuf::from(".")).with_block_size(512);
        assert!(matches!(job.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn validate_rejects_empty_file_list() {
        let job = HashJob::new(Vec::new(), PathBuf::from("."))
            .with_algorithm(HashAlgorithm::Sha1)
            .with_block_size(512);
        assert!(matches!(job.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn reset_clears_a_consumed_stop_request_for_every_clone() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        token.reset();
        assert!(!token.is_cancelled());
        assert!(!clone.is_cancelled());
    }
}
