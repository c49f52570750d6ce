//! Subcommand dispatch.
//!
//! Each subcommand turns its arguments into a validated request, runs it
//! through the [`Session`] and renders the result to `out`.

pub mod build;
pub mod cancel;
pub mod chroot;
pub mod info;
pub mod list;
pub mod search;
pub mod status;

use crate::cli::{Cli, Commands};
use crate::error::CliError;

use copr_client::{CoprConfiguration, Session};

use log::{debug, info};
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
/// Any failure after argument parsing. clap itself exits with 2 on usage errors.
pub const EXIT_FAILURE: u8 = 1;

/// Load the configuration named on the command line and run the selected
/// subcommand, writing its output to `out`.
pub async fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let mut configuration = CoprConfiguration::load(cli.config.as_deref())?;
    if let Some(username) = &cli.username {
        debug!("Username overridden on the command line: {username}");
        configuration = configuration.with_username(username.as_str())?;
    }

    let mut session = Session::open(configuration)?;

    let result = match &cli.command {
        Commands::Build(args) => build::run(&mut session, args, out).await,
        Commands::List(args) => list::run(&mut session, args, out).await,
        Commands::Status(args) => status::run(&mut session, args, out).await,
        Commands::Cancel(args) => cancel::run(&mut session, args, out).await,
        Commands::Info(args) => info::run(&mut session, args, out).await,
        Commands::Chroot(args) => chroot::run(&mut session, args, out).await,
        Commands::Search(args) => search::run(&mut session, args, out).await,
    };

    info!("Finished after {} command(s)", session.commands_executed());
    session.close();

    result
}

/// Process exit status for a finished invocation.
pub fn exit_status(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

/// Split `OWNER/NAME`; a bare `NAME` belongs to `default_owner`.
pub(crate) fn owner_and_project<'a>(
    argument: &'a str,
    default_owner: &'a str,
) -> (&'a str, &'a str) {
    match argument.split_once('/') {
        Some((owner, project)) => (owner, project),
        None => (default_owner, argument),
    }
}
