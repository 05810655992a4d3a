use std::process::ExitCode;

use clap::Parser;
use lokal::cli::Arguments;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();

    let default_filter = if args.verbose() {
        "lokal=debug"
    } else {
        "lokal=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    lokal::cli::run_cli(args).into()
}
