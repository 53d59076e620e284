use crate::domain::{JobStatus, JobSummary};
use crate::ports::OutputPort;
use anyhow::Result;
use console::style;

pub struct ConsoleOutputAdapter;

impl ConsoleOutputAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPort for ConsoleOutputAdapter {
    fn write_summary(&self, summary: &JobSummary) -> Result<()> {
        println!("\n=== Block Hashing Summary ===");
        match &summary.status {
            JobStatus::Completed => println!("Status: {}", style(&summary.status).green()),
            JobStatus::Cancelled => println!("Status: {}", style(&summary.status).yellow()),
            JobStatus::Failed(_) => println!("Status: {}", style(&summary.status).red()),
        }
        println!("Algorithm: {}", summary.algorithm);
        println!("Block size: {} bytes", summary.block_size);
        println!("Files: {}", summary.files);
        println!("Digests written: {}", summary.digests);
        println!("Artifact: {}", summary.artifact.display());
        println!("Elapsed: {} ms", summary.elapsed_ms);

        Ok(())
    }
}

pub struct JsonOutputAdapter;

impl JsonOutputAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPort for JsonOutputAdapter {
    fn write_summary(&self, summary: &JobSummary) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        println!("{}", json);
        Ok(())
    }
}
