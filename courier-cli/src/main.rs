//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use courier_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("courier: failed to initialise logging: {err}");
    }

    match courier_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("courier: {err}");
            std::process::exit(1);
        }
    }
}
