//! Command-line surface of `copr`.
//!
//! ```text
//! copr build PROJECT SRPM_URL... [--memory MIB] [--timeout SECS] [-r CHROOT]...
//! copr list [USERNAME]
//! copr status BUILD_ID
//! copr cancel BUILD_ID
//! copr info [OWNER/]PROJECT
//! copr chroot [OWNER/]PROJECT CHROOT
//! copr search QUERY
//! ```
//!
//! Global flags: `-c/--config PATH`, `-u/--username NAME`, `-v` (repeatable),
//! `-q/--quiet`, `--log-file PATH`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "copr",
    version,
    about = "Command-line client for the Copr build service",
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Configuration file to use (default: <config dir>/copr.toml)
    #[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Act as this user instead of the configured username
    #[arg(short = 'u', long = "username", global = true, value_name = "NAME")]
    pub username: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write the log to this file
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit source RPMs for building in one of your projects
    Build(BuildArgs),

    /// List the projects of a user (default: the configured user)
    List(ListArgs),

    /// Show the state of a build
    Status(BuildIdArgs),

    /// Cancel a build
    Cancel(BuildIdArgs),

    /// Show the description and repositories of a project
    Info(ProjectArgs),

    /// List the extra buildroot packages of one chroot of a project
    Chroot(ChrootArgs),

    /// Find projects of any user by name
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project to build in
    pub project: String,

    /// URLs of the source RPMs, built in the given order
    #[arg(required = true, value_name = "SRPM_URL")]
    pub srpms: Vec<String>,

    /// Memory limit for the builder, in MiB
    #[arg(long, value_name = "MIB")]
    pub memory: Option<u64>,

    /// Build timeout, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Only build in this chroot (repeatable)
    #[arg(short = 'r', long = "chroot", value_name = "CHROOT")]
    pub chroots: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Owner whose projects to list
    pub username: Option<String>,
}

#[derive(Args, Debug)]
pub struct BuildIdArgs {
    pub build_id: u64,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// NAME for your own project, OWNER/NAME for anyone's
    pub project: String,
}

#[derive(Args, Debug)]
pub struct ChrootArgs {
    /// NAME for your own project, OWNER/NAME for anyone's
    pub project: String,

    pub chroot: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Substring of the project name
    pub query: String,
}
