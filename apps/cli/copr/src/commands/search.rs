use crate::cli::SearchArgs;
use crate::error::CliError;
use crate::output::write_search_results;

use copr_client::Session;
use copr_client::transport::Transport;

use models::SearchRequest;

use log::info;
use std::io::Write;

/// Search all users' projects by name substring.
pub async fn run<T, W>(
    session: &mut Session<T>,
    args: &SearchArgs,
    out: &mut W,
) -> Result<(), CliError>
where
    T: Transport,
    W: Write,
{
    let request = SearchRequest::new(args.query.as_str())?;

    let result = session.search(&request).await?;
    info!("{} project(s) match {:?}", result.len(), request.query());

    write_search_results(out, &result)?;
    Ok(())
}
