//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or(sommelier_cli::LOG_ENV, "warn")).init();
    if let Err(err) = sommelier_cli::run() {
        report(&err);
        std::process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &sommelier_cli::CliError) {
    eprintln!("sommelier: {err}");
}
