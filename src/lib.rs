//! Block-level file hashing: every file is read in fixed-size blocks, each
//! full block is digested with MD5, SHA-1, or SHA-256, and the uppercase hex
//! digests are streamed into a `hashes.hsh` artifact headed by the algorithm
//! name. Runs can be cancelled between I/O operations without corrupting
//! what was already written.

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use domain::{CancelToken, HashAlgorithm, HashJob, JobStatus, JobSummary};
pub use error::{Error, Result};
