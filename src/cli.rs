use crate::adapters::FileSystemAdapter;
use crate::domain::{ARTIFACT_FILE_NAME, HashAlgorithm, HashJob};
use crate::ports::FileSystemPort;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum AlgorithmChoice {
    #[value(help = "Slow legacy hash")]
    Md5,
    #[value(help = "Slow legacy hash")]
    Sha1,
    #[value(help = "Cryptographic hash")]
    Sha256,
}

impl From<AlgorithmChoice> for HashAlgorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Md5 => HashAlgorithm::Md5,
            AlgorithmChoice::Sha1 => HashAlgorithm::Sha1,
            AlgorithmChoice::Sha256 => HashAlgorithm::Sha256,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "blkhash")]
#[command(about = "Hashes files block by block into a digest artifact")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Files to hash, or a single directory whose files are hashed")]
    pub paths: Vec<PathBuf>,

    #[arg(
        short = 'a',
        long = "algorithm",
        help = "Hash algorithm applied to every block",
        value_enum
    )]
    pub algorithm: AlgorithmChoice,

    #[arg(
        short = 'b',
        long = "block-size",
        help = "Block size in bytes; trailing bytes shorter than this are skipped"
    )]
    pub block_size: usize,

    #[arg(
        short = 'o',
        long = "output-dir",
        help = "Directory the artifact is written into (defaults next to the input)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "recursive",
        help = "Descend into subdirectories when hashing a directory"
    )]
    pub recursive: bool,

    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(
        short = 'f',
        long = "format",
        help = "Summary output format",
        value_enum,
        default_value = "text"
    )]
    pub format: OutputFormat,
}

impl Cli {
    /// Builds the job from the command line. A single directory argument is
    /// expanded to the files it holds, minus any artifact from an earlier
    /// run; anything else is taken as an explicit file list. The artifact
    /// lands in the hashed directory, or next to the first file, unless an
    /// output directory was given.
    pub fn to_hash_job(&self) -> Result<HashJob> {
        if self.paths.is_empty() {
            return Err(anyhow::anyhow!("no input paths given"));
        }

        let (files, default_output_dir) = if self.paths.len() == 1 && self.paths[0].is_dir() {
            let dir = &self.paths[0];
            let files: Vec<PathBuf> = FileSystemAdapter::new()
                .list_files(dir, self.recursive)?
                .into_iter()
                .filter(|path| path.file_name().is_none_or(|name| name != ARTIFACT_FILE_NAME))
                .collect();
            (files, dir.clone())
        } else {
            let files = self.paths.clone();
            let parent = match files[0].parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            (files, parent)
        };

        let output_dir = self.output_dir.clone().unwrap_or(default_output_dir);

        Ok(HashJob::new(files, output_dir)
            .with_algorithm(self.algorithm.clone().into())
            .with_block_size(self.block_size))
    }
}
