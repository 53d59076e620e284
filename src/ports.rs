use crate::domain::{HashAlgorithm, JobStatus, JobSummary};
use crate::error;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub trait DigestPort {
    fn digest_block(&self, algorithm: HashAlgorithm, block: &[u8]) -> error::Result<String>;
}

/// Observer the shell registers with the orchestrator. `update` carries the
/// monotonically increasing digest count, `report` the batched digest text,
/// and `finish` fires exactly once per run with the terminal status.
pub trait ProgressPort {
    fn start(&self, total_blocks: u64);
    fn update(&self, digests: u64);
    fn report(&self, text: &str);
    fn finish(&self, status: &JobStatus);
}

pub trait FileSystemPort {
    fn list_files(&self, root: &Path, recursive: bool) -> Result<Vec<PathBuf>>;
}

pub trait OutputPort {
    fn write_summary(&self, summary: &JobSummary) -> Result<()>;
}
