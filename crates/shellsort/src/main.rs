use std::process::ExitCode;

use shellsort::Invocation;
use shellsort::cli::{USAGE, run};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let invocation = match Invocation::from_args(std::env::args_os().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => {
            tracing::error!(%err, "{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&invocation, |comparisons| println!("{comparisons}")) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "sort failed");
            ExitCode::FAILURE
        }
    }
}
