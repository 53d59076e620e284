use crate::adapters::{ArtifactWriter, BatchReporter, BlockReader};
use crate::domain::{CancelToken, HashAlgorithm, HashJob, JobStatus, JobSummary};
use crate::error::{Error, Result};
use crate::ports::{DigestPort, ProgressPort};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

pub struct BlockHashService<D, P> {
    digester: D,
    progress: P,
    cancel: CancelToken,
}

impl<D, P> BlockHashService<D, P>
where
    D: DigestPort,
    P: ProgressPort,
{
    pub fn new(digester: D, progress: P) -> Self {
        Self {
            digester,
            progress,
            cancel: CancelToken::new(),
        }
    }

    /// Token that stops this service's run when cancelled. Clone it into a
    /// signal handler or another thread.
    pub fn cancel_handle(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Hashes every configured file block by block and streams the digests
    /// into the artifact. Returns a summary with `Completed` or `Cancelled`
    /// status; hard failures come back as `Err` after the progress sink has
    /// been told the run failed. Digest lines already written stay in the
    /// artifact whichever way the run ends. A stop request is consumed by
    /// the run it ends: the token is re-armed on every terminal path, so a
    /// later run on the same service starts fresh.
    pub fn run(&self, job: &HashJob) -> Result<JobSummary> {
        let outcome = self.execute(job);
        self.cancel.reset();
        outcome
    }

    fn execute(&self, job: &HashJob) -> Result<JobSummary> {
        let started = Instant::now();

        let (algorithm, block_size) = match job.validate() {
            Ok(validated) => validated,
            Err(err) => {
                self.progress.finish(&JobStatus::Failed(err.to_string()));
                return Err(err);
            }
        };

        info!(
            "hashing {} files with {} in {} byte blocks",
            job.files.len(),
            algorithm,
            block_size
        );
        self.progress
            .start(Self::estimate_total_blocks(&job.files, block_size));

        let artifact = job.artifact_path();
        let mut writer = match ArtifactWriter::create(&artifact) {
            Ok(writer) => writer,
            Err(err) => {
                self.progress.finish(&JobStatus::Failed(err.to_string()));
                return Err(err);
            }
        };
        let mut reporter = BatchReporter::new();
        let mut digests = 0u64;

        let outcome = self.hash_files(
            job,
            algorithm,
            block_size,
            &mut writer,
            &mut reporter,
            &mut digests,
        );

        let status = match outcome {
            Ok(()) => {
                reporter.flush(&self.progress, &self.cancel);
                if let Err(err) = writer.close() {
                    self.progress.finish(&JobStatus::Failed(err.to_string()));
                    return Err(err);
                }
                JobStatus::Completed
            }
            Err(Error::Cancelled) => {
                // Whatever is batched but unreported is dropped; lines already
                // in the artifact stay there.
                reporter.clear();
                if let Err(err) = writer.close() {
                    warn!(
                        "could not close {} after cancellation: {}",
                        artifact.display(),
                        err
                    );
                }
                JobStatus::Cancelled
            }
            Err(err) => {
                reporter.clear();
                if let Err(close_err) = writer.close() {
                    warn!(
                        "could not close {} after failure: {}",
                        artifact.display(),
                        close_err
                    );
                }
                self.progress.finish(&JobStatus::Failed(err.to_string()));
                return Err(err);
            }
        };

        let summary = JobSummary {
            status,
            algorithm,
            block_size,
            files: job.files.len(),
            digests,
            artifact,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        self.progress.finish(&summary.status);
        match summary.status {
            JobStatus::Cancelled => info!("cancelled after {} digests", summary.digests),
            _ => info!(
                "wrote {} digests to {} in {} ms",
                summary.digests,
                summary.artifact.display(),
                summary.elapsed_ms
            ),
        }
        Ok(summary)
    }

    fn hash_files(
        &self,
        job: &HashJob,
        algorithm: HashAlgorithm,
        block_size: usize,
        writer: &mut ArtifactWriter,
        reporter: &mut BatchReporter,
        digests: &mut u64,
    ) -> Result<()> {
        writer.write_header(algorithm)?;
        // A stop requested before the loop leaves a header-only artifact.
        self.ensure_live()?;

        // One block buffer for the whole run, shared across files.
        let mut buffer = vec![0u8; block_size];
        for path in &job.files {
            self.ensure_live()?;
            debug!("hashing {}", path.display());
            let mut reader = BlockReader::open(path)?;
            while let Some(block) = reader.next_block(&mut buffer)? {
                self.ensure_live()?;
                let digest = self.digester.digest_block(algorithm, block)?;
                writer.write_digest(&digest)?;
                *digests += 1;
                self.progress.update(*digests);
                reporter.append(&digest);
                if reporter.should_flush() {
                    reporter.flush(&self.progress, &self.cancel);
                }
                self.ensure_live()?;
            }
        }
        Ok(())
    }

    fn ensure_live(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }

    /// Advisory total for the progress bar. Unreadable files count as zero
    /// here and surface as errors once hashing reaches them.
    fn estimate_total_blocks(files: &[PathBuf], block_size: usize) -> u64 {
        files
            .iter()
            .filter_map(|path| fs::metadata(path).ok())
            .map(|meta| meta.len() / block_size as u64)
            .sum()
    }
}
