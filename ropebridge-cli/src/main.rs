//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use ropebridge_cli::CliError;

fn main() {
    env_logger::init();
    match ropebridge_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("ropebridge: {err}");
            std::process::exit(1);
        }
    }
}
