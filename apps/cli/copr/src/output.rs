//! Plain-text rendering of results for stdout.

use models::{
    BuildDetails, BuildResult, CancelResult, ChrootDetails, ListResult, ProjectDetails,
};

use std::io::{self, Write};
use std::time::{Duration, UNIX_EPOCH};

use humantime::format_rfc3339_seconds;

pub fn write_build_result<W: Write>(out: &mut W, result: &BuildResult) -> io::Result<()> {
    writeln!(out, "{}", result.message())?;
    for id in result.build_ids() {
        writeln!(out, "Build ID: {id}")?;
    }
    Ok(())
}

/// One project name per line.
pub fn write_project_list<W: Write>(out: &mut W, result: &ListResult) -> io::Result<()> {
    for id in result.project_ids() {
        writeln!(out, "{}", id.project_name())?;
    }
    Ok(())
}

/// One `OWNER/NAME` per line; hits come from many users.
pub fn write_search_results<W: Write>(out: &mut W, result: &ListResult) -> io::Result<()> {
    for id in result.project_ids() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}

pub fn write_project_details<W: Write>(out: &mut W, details: &ProjectDetails) -> io::Result<()> {
    writeln!(out, "Project: {}", details.id())?;

    if let Some(description) = details.description() {
        writeln!(out, "  Description: {description}")?;
    }
    if let Some(instructions) = details.instructions() {
        writeln!(out, "  Instructions: {instructions}")?;
    }
    if let Some(seconds) = details.last_modified() {
        writeln!(out, "  Last modified: {}", format_timestamp(seconds))?;
    }
    for repo in details.additional_repos() {
        writeln!(out, "  Additional repo: {repo}")?;
    }
    for repo in details.yum_repos() {
        writeln!(out, "  Repo {}: {}", repo.release(), repo.url())?;
    }

    Ok(())
}

/// Buildroot packages, one per line.
pub fn write_chroot_details<W: Write>(out: &mut W, details: &ChrootDetails) -> io::Result<()> {
    for package in details.buildroot_pkgs() {
        writeln!(out, "{package}")?;
    }
    Ok(())
}

pub fn write_build_details<W: Write>(out: &mut W, details: &BuildDetails) -> io::Result<()> {
    writeln!(out, "Build {}: {}", details.build_id(), details.status())?;
    writeln!(out, "  Project: {}/{}", details.owner(), details.project())?;

    if let Some(src_pkg) = details.src_pkg() {
        match details.src_version() {
            Some(version) => writeln!(out, "  Source: {src_pkg} ({version})")?,
            None => writeln!(out, "  Source: {src_pkg}")?,
        }
    }
    if let Some(results) = details.results() {
        writeln!(out, "  Results: {results}")?;
    }

    for (label, timestamp) in [
        ("Submitted", details.submitted_on()),
        ("Started", details.started_on()),
        ("Ended", details.ended_on()),
    ] {
        if let Some(seconds) = timestamp {
            writeln!(out, "  {label}: {}", format_timestamp(seconds))?;
        }
    }

    Ok(())
}

pub fn write_cancel_result<W: Write>(out: &mut W, result: &CancelResult) -> io::Result<()> {
    writeln!(out, "Build {}: {}", result.build_id(), result.status())
}

/// Unix seconds as RFC 3339; negative values are printed raw.
fn format_timestamp(seconds: i64) -> String {
    match u64::try_from(seconds) {
        Ok(seconds) => format_rfc3339_seconds(UNIX_EPOCH + Duration::from_secs(seconds)).to_string(),
        Err(_) => seconds.to_string(),
    }
}
