use crate::domain::HashAlgorithm;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only writer for the hash artifact: one algorithm header line, then
/// one digest per line. Creating the writer truncates anything left over
/// from a previous run. Each line goes out as a single `write_all`, so the
/// file never carries a digest split across writes. `close` is idempotent
/// and also runs on drop, so every exit path releases the handle.
pub struct ArtifactWriter {
    out: Option<BufWriter<File>>,
    path: PathBuf,
}

impl ArtifactWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::Artifact {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn write_header(&mut self, algorithm: HashAlgorithm) -> Result<()> {
        self.write_line(algorithm.as_str())
    }

    pub fn write_digest(&mut self, hex: &str) -> Result<()> {
        self.write_line(hex)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Err(Error::Artifact {
                path: self.path.clone(),
                source: io::Error::other("writer already closed"),
            });
        };
        out.write_all(format!("{text}\n").as_bytes())
            .map_err(|source| Error::Artifact {
                path: self.path.clone(),
                source,
            })
    }

    /// Flushes buffered lines and releases the file handle. Safe to call any
    /// number of times; later calls are no-ops.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut out) = self.out.take() {
            out.flush().map_err(|source| Error::Artifact {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

impl Drop for ArtifactWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn header_then_digests_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashes.hsh");

        let mut writer = ArtifactWriter::create(&path).unwrap();
        writer.write_header(HashAlgorithm::Md5).unwrap();
        writer.write_digest("AAAA").unwrap();
        writer.write_digest("BBBB").unwrap();
        writer.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "MD5\nAAAA\nBBBB\n");
    }

    #[test]
    fn close_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashes.hsh");

        let mut writer = ArtifactWriter::create(&path).unwrap();
        writer.write_header(HashAlgorithm::Sha1).unwrap();
        writer.close().unwrap();
        writer.close().unwrap();
    }

    #[test]
    fn writing_after_close_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashes.hsh");

        let mut writer = ArtifactWriter::create(&path).unwrap();
        writer.close().unwrap();
        assert!(matches!(
            writer.write_digest("AAAA"),
            Err(Error::Artifact { .. })
        ));
    }

    #[test]
    fn recreate_truncates_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashes.hsh");

        let mut first = ArtifactWriter::create(&path).unwrap();
        first.write_header(HashAlgorithm::Sha256).unwrap();
        first.write_digest("CCCC").unwrap();
        first.close().unwrap();

        let mut second = ArtifactWriter::create(&path).unwrap();
        second.write_header(HashAlgorithm::Md5).unwrap();
        second.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "MD5\n");
    }

    #[test]
    fn drop_flushes_pending_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hashes.hsh");

        {
            let mut writer = ArtifactWriter::create(&path).unwrap();
            writer.write_header(HashAlgorithm::Sha1).unwrap();
            writer.write_digest("DDDD").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "SHA1\nDDDD\n");
    }
}
