use std::{io, process::ExitCode};

use clap::Parser;
use digitwise::cli::{Args, EXIT_FAILURE, execute};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let status = execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock())
        .unwrap_or_else(|e| {
            eprintln!("Failed to write the results: {e}");
            EXIT_FAILURE
        });

    ExitCode::from(status)
}
