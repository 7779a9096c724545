//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tourpack_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "report fatal errors to the terminal before exiting"
)]
fn main() {
    match tourpack_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("tourpack: {err}");
            std::process::exit(1);
        }
    }
}
