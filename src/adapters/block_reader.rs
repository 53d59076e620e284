use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Streams one file as a sequence of full-size blocks. The caller supplies
/// the block buffer, so one allocation can serve a whole run. A trailing
/// tail shorter than one block is discarded: every block handed out has
/// exactly `buf.len()` bytes. No seek state is kept; restarting means
/// reopening the file.
#[derive(Debug)]
pub struct BlockReader {
    reader: BufReader<File>,
    path: PathBuf,
}

impl BlockReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Fills `buf` with the next block, or returns `None` once the remaining
    /// content is shorter than one block. Whatever `read_exact` consumed
    /// before hitting end-of-file is dropped with it.
    pub fn next_block<'buf>(&mut self, buf: &'buf mut [u8]) -> Result<Option<&'buf [u8]>> {
        match self.reader.read_exact(buf) {
            Ok(()) => Ok(Some(buf)),
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(source) => Err(Error::FileAccess {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
