use blkhash::adapters::{
    ConsoleOutputAdapter, JsonOutputAdapter, MultiAlgorithmDigester, ProgressBarAdapter,
};
use blkhash::cli::{Cli, OutputFormat};
use blkhash::domain::JobStatus;
use blkhash::ports::OutputPort;
use blkhash::services::BlockHashService;
use clap::Parser;
use std::process;

fn main() {
    env_logger::init();

    let args = Cli::parse();
    let job = match args.to_hash_job() {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Error preparing job: {}", e);
            process::exit(1);
        }
    };

    let digester = MultiAlgorithmDigester::new();
    let progress = ProgressBarAdapter::new().with_quiet(args.quiet);
    let service = BlockHashService::new(digester, progress);

    let cancel = service.cancel_handle();
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        eprintln!("Error installing Ctrl-C handler: {}", e);
        process::exit(1);
    }

    match service.run(&job) {
        Ok(summary) => {
            let output: Box<dyn OutputPort> = match args.format {
                OutputFormat::Text => Box::new(ConsoleOutputAdapter::new()),
                OutputFormat::Json => Box::new(JsonOutputAdapter::new()),
            };
            if let Err(e) = output.write_summary(&summary) {
                eprintln!("Error writing summary: {}", e);
                process::exit(1);
            }
            if summary.status == JobStatus::Cancelled {
                // Exit code convention for interrupted runs.
                process::exit(130);
            }
        }
        Err(e) => {
            eprintln!("Error during hashing: {}", e);
            process::exit(1);
        }
    }
}
