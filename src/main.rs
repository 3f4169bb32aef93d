use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use randpick::cli;
use randpick::logging::init_logging;
use randpick::rng::OsEntropy;
use tracing::error;

fn main() -> ExitCode {
    init_logging("warn");

    let args = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let mut out = BufWriter::new(io::stdout().lock());

    match cli::run(args, &mut OsEntropy::new(), &mut out) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            error!(error = %err, "failed to write output");
            ExitCode::FAILURE
        }
    }
}
