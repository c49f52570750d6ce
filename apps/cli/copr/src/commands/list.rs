use crate::cli::ListArgs;
use crate::error::CliError;
use crate::output::write_project_list;

use copr_client::Session;
use copr_client::transport::Transport;

use models::ListRequest;

use log::info;
use std::io::Write;

/// List the projects of the named user, or of the configured user.
pub async fn run<T, W>(
    session: &mut Session<T>,
    args: &ListArgs,
    out: &mut W,
) -> Result<(), CliError>
where
    T: Transport,
    W: Write,
{
    let username = match &args.username {
        Some(username) => username.clone(),
        None => session.configuration().username().to_string(),
    };
    let request = ListRequest::new(username)?;

    let result = session.list(&request).await?;
    info!("{} has {} project(s)", request.username(), result.len());

    write_project_list(out, &result)?;
    Ok(())
}
