//! Core library entry for the `lucidlink` CLI.
//!
//! Resolves media paths on the `sandwich-post` filespace mount into
//! `lucid://` deep links by querying the local filespace lookup service,
//! and copies the links for a host application's selection to the clipboard.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod link;
pub mod normalize;
pub mod ports;
pub mod resolver;
pub mod selection;
pub mod sequence;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use error::ResolveError;
pub use link::{DeepLink, FileId};
pub use normalize::{NormalizationPolicy, ShortPath};
pub use resolver::LinkResolver;
pub use sequence::is_sequence_path;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    init_logging(cli.verbose);
    commands::dispatch(&cli)
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `verbose`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A subscriber may already be installed when `run` is called more than once.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
