//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::PolicyKind;

/// Top-level CLI parser for `lucidlink`.
#[derive(Debug, Parser)]
#[command(
    name = "lucidlink",
    version,
    about = "Copy LucidLink deep links for selected media"
)]
pub struct Cli {
    /// YAML config file (defaults to $LUCIDLINK_CONFIG).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve media paths given on the command line and print their links.
    Resolve {
        /// Short-path derivation to apply.
        #[arg(long, value_enum, default_value_t = PolicyKind::PatternExtract)]
        policy: PolicyKind,
        /// Also copy the resolved links to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Media paths (frame-sequence templates resolve through their folder).
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },
    /// Copy links for the track items of an exported timeline selection.
    Timeline {
        /// Exported selection (YAML or JSON).
        #[arg(long, value_name = "FILE")]
        selection: PathBuf,
        /// Override the host's default short-path derivation.
        #[arg(long, value_enum)]
        policy: Option<PolicyKind>,
        /// Print links to stdout instead of the clipboard.
        #[arg(long)]
        print: bool,
    },
    /// Copy links for the read nodes of an exported node-graph selection.
    Nodes {
        /// Exported selection (YAML or JSON).
        #[arg(long, value_name = "FILE")]
        selection: PathBuf,
        /// Override the host's default short-path derivation.
        #[arg(long, value_enum)]
        policy: Option<PolicyKind>,
        /// Print links to stdout instead of the clipboard.
        #[arg(long)]
        print: bool,
    },
    /// Show the short path and lookup path for a media path without querying.
    Normalize {
        /// Short-path derivation to apply.
        #[arg(long, value_enum, default_value_t = PolicyKind::PatternExtract)]
        policy: PolicyKind,
        /// Media path to normalize.
        #[arg(value_name = "PATH")]
        path: String,
    },
}

impl Command {
    /// Whether links should go to stdout rather than the system clipboard.
    #[must_use]
    pub fn prints_links(&self) -> bool {
        match self {
            Self::Timeline { print, .. } | Self::Nodes { print, .. } => *print,
            Self::Resolve { .. } | Self::Normalize { .. } => false,
        }
    }
}
