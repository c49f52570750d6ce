use copr_cli::cli::Cli;
use copr_cli::commands;
use copr_cli::logger::initialize as LoggerInitialize;

use std::io::{Write, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggerInitialize(cli.log_level(), cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::from(commands::EXIT_FAILURE);
    }

    debug!("Parsed command line: {cli:?}");

    let mut out = stdout().lock();
    let result = commands::execute(&cli, &mut out).await;
    let flushed = out.flush();

    let result = result.and(flushed.map_err(Into::into));
    if let Err(e) = &result {
        error!("{e}");
    }

    ExitCode::from(commands::exit_status(&result))
}
