//! `lucidlink timeline` and `lucidlink nodes` commands.

use std::path::Path;

use crate::adapters::live::SelectionFile;
use crate::config::{Config, PolicyKind};
use crate::context::ServiceContext;
use crate::selection::{copy_links, HostVariant};

/// Copy links for an exported host selection and show the outcome.
///
/// # Errors
///
/// Returns an error string if the clipboard write fails.
pub async fn run(
    ctx: &ServiceContext,
    config: &Config,
    variant: HostVariant,
    selection: &Path,
    policy: Option<PolicyKind>,
) -> Result<(), String> {
    let provider = match variant {
        HostVariant::Timeline => SelectionFile::new(selection).requiring_sequence(),
        HostVariant::NodeGraph => SelectionFile::new(selection),
    };
    let policy = config.policy(policy.unwrap_or_else(|| variant.default_policy()));

    let notice = copy_links(ctx, &provider, variant, &policy, config).await?;
    ctx.notifier.notify(&notice);
    Ok(())
}
