use super::owner_and_project;
use crate::cli::ProjectArgs;
use crate::error::CliError;
use crate::output::write_project_details;

use copr_client::Session;
use copr_client::transport::Transport;

use models::ProjectDetailsRequest;

use std::io::Write;

pub async fn run<T, W>(
    session: &mut Session<T>,
    args: &ProjectArgs,
    out: &mut W,
) -> Result<(), CliError>
where
    T: Transport,
    W: Write,
{
    let (owner, project) = owner_and_project(&args.project, session.configuration().username());
    let request = ProjectDetailsRequest::new(owner, project)?;

    let details = session.project_details(&request).await?;
    write_project_details(out, &details)?;
    Ok(())
}
