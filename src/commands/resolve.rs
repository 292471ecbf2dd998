//! `lucidlink resolve` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::normalize::NormalizationPolicy;
use crate::ports::notifier::Notice;
use crate::resolver::LinkResolver;
use crate::sequence::lookup_path;

/// Resolve each path, printing its link on stdout or its error on stderr.
///
/// With `copy`, the resolved links are also placed on the clipboard.
///
/// # Errors
///
/// Returns an error string if no path resolved or the clipboard write fails.
pub async fn run(
    ctx: &ServiceContext,
    config: &Config,
    policy: &NormalizationPolicy,
    paths: &[String],
    copy: bool,
) -> Result<(), String> {
    let resolver = LinkResolver::new(ctx, policy, &config.filespace);

    let mut links = Vec::new();
    for path in paths {
        match resolver.resolve(lookup_path(path)).await {
            Ok(link) => {
                println!("{link}");
                links.push(link.to_string());
            }
            Err(e) => eprintln!("[Error] {e}"),
        }
    }

    if links.is_empty() {
        return Err(Notice::NoValidLinks.to_string());
    }

    if copy {
        ctx.clipboard
            .set_text(&links.join("\n"))
            .map_err(|e| format!("Failed to copy links to clipboard: {e}"))?;
        let notice = Notice::delivered(links.len(), ctx.clipboard.is_stdout());
        ctx.notifier.notify(&notice);
    }
    Ok(())
}
