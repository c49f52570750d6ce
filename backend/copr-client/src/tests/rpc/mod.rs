mod build;
mod command_path;
mod execute;
mod list;
mod project;
mod search;
mod single_build;
