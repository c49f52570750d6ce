use super::owner_and_project;
use crate::cli::ChrootArgs;
use crate::error::CliError;
use crate::output::write_chroot_details;

use copr_client::Session;
use copr_client::transport::Transport;

use models::ProjectChrootRequest;

use std::io::Write;

pub async fn run<T, W>(
    session: &mut Session<T>,
    args: &ChrootArgs,
    out: &mut W,
) -> Result<(), CliError>
where
    T: Transport,
    W: Write,
{
    let (owner, project) = owner_and_project(&args.project, session.configuration().username());
    let request = ProjectChrootRequest::new(owner, project, args.chroot.as_str())?;

    let details = session.project_chroot(&request).await?;
    write_chroot_details(out, &details)?;
    Ok(())
}
