use crate::cli::BuildArgs;
use crate::error::CliError;
use crate::output::write_build_result;

use copr_client::Session;
use copr_client::transport::Transport;

use models::BuildRequest;

use log::info;
use std::io::Write;

/// Submit the given source RPMs to a project owned by the session's user.
pub async fn run<T, W>(
    session: &mut Session<T>,
    args: &BuildArgs,
    out: &mut W,
) -> Result<(), CliError>
where
    T: Transport,
    W: Write,
{
    let mut builder = BuildRequest::builder()
        .with_username(session.configuration().username())
        .with_project_name(args.project.as_str())
        .with_source_rpms(&args.srpms)
        .with_memory(args.memory)
        .with_timeout(args.timeout);
    for chroot in &args.chroots {
        builder = builder.add_chroot(chroot.as_str());
    }
    let request = builder.build()?;

    info!(
        "Submitting {} source RPM(s) to {}/{}",
        request.source_rpms().len(),
        request.username(),
        request.project_name()
    );

    let result = session.build(&request).await?;
    write_build_result(out, &result)?;
    Ok(())
}
