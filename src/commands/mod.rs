//! Command dispatch and handlers.

pub mod normalize;
pub mod resolve;
pub mod select;

use std::env;
use std::path::PathBuf;

use crate::adapters::live::StdoutClipboard;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::selection::HostVariant;

/// Environment variable naming a cassette file to record lookups into.
pub const RECORD_ENV: &str = "LUCIDLINK_RECORD";

/// Dispatch a parsed command line to its handler.
///
/// When `LUCIDLINK_RECORD` is set to a file path, every lookup and
/// filesystem interaction is recorded to that cassette.
///
/// # Errors
///
/// Returns an error string if configuration cannot be loaded or the
/// selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    if let Command::Normalize { policy, path } = &cli.command {
        return normalize::run(&config.policy(*policy), path);
    }

    let mut ctx = match env::var_os(RECORD_ENV) {
        Some(path) => ServiceContext::recording(&config, &PathBuf::from(path)),
        None => ServiceContext::live(&config),
    };
    if cli.command.prints_links() {
        ctx = ctx.with_clipboard(Box::new(StdoutClipboard));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;
    let result = runtime.block_on(dispatch_with_context(&cli.command, &ctx, &config));

    // Finish recording after the command completes (even on error).
    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}

/// Dispatch a command with the given service context.
async fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::Resolve {
            policy,
            copy,
            paths,
        } => resolve::run(ctx, config, &config.policy(*policy), paths, *copy).await,
        Command::Timeline {
            selection,
            policy,
            ..
        } => select::run(ctx, config, HostVariant::Timeline, selection, *policy).await,
        Command::Nodes {
            selection,
            policy,
            ..
        } => select::run(ctx, config, HostVariant::NodeGraph, selection, *policy).await,
        Command::Normalize { policy, path } => normalize::run(&config.policy(*policy), path),
    }
}
