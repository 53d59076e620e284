pub mod artifact;
pub mod block_reader;
pub mod digester;
pub mod filesystem;
pub mod output;
pub mod progress;
pub mod reporter;

pub use artifact::ArtifactWriter;
pub use block_reader::BlockReader;
pub use digester::MultiAlgorithmDigester;
pub use filesystem::FileSystemAdapter;
pub use output::{ConsoleOutputAdapter, JsonOutputAdapter};
pub use progress::ProgressBarAdapter;
pub use reporter::{BatchReporter, REPORT_FLUSH_THRESHOLD};
