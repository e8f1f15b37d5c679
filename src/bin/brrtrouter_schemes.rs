use brrtrouter_schemes::cli::{run_cli, Cli};
use brrtrouter_schemes::otel;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = otel::init_logging_with_config(&otel::LogConfig::from_env()) {
        eprintln!("logging disabled: {e:#}");
    }

    match run_cli(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
