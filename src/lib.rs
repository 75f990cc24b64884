//! Core library entry for the `spec-manager` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod prompt;
pub mod report;
pub mod store;
pub mod task;
pub mod transition;
pub mod validate;

#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

pub use error::{Error, Result};

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed. Without a
/// subcommand the usage help is printed.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails, or the error of the
/// executed command.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err)),
    };
    logging::init(cli.verbose);

    let Some(command) = &cli.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };
    let config = config::Config::load(cli.root.as_deref(), cli.config.as_deref())?;
    commands::dispatch(command, &config)
}
