use crate::cli::BuildIdArgs;
use crate::error::CliError;
use crate::output::write_build_details;

use copr_client::Session;
use copr_client::transport::Transport;

use models::BuildDetailsRequest;

use std::io::Write;

pub async fn run<T, W>(
    session: &mut Session<T>,
    args: &BuildIdArgs,
    out: &mut W,
) -> Result<(), CliError>
where
    T: Transport,
    W: Write,
{
    let request = BuildDetailsRequest::new(args.build_id)?;
    let details = session.build_details(&request).await?;
    write_build_details(out, &details)?;
    Ok(())
}
