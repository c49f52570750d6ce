use crate::cli::BuildIdArgs;
use crate::error::CliError;
use crate::output::write_cancel_result;

use copr_client::Session;
use copr_client::transport::Transport;

use models::CancelBuildRequest;

use log::info;
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
    let request = CancelBuildRequest::new(args.build_id)?;
    info!("Cancelling build {}", request.build_id());

    let result = session.cancel_build(&request).await?;
    write_cancel_result(out, &result)?;
    Ok(())
}
