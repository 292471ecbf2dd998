//! Selection adapters: turn a host selection into copied deep links.
//!
//! The timeline and node-graph hosts differ in which items they accept and
//! how they derive short paths; everything after path extraction is shared.

use crate::config::{Config, PolicyKind};
use crate::context::ServiceContext;
use crate::normalize::NormalizationPolicy;
use crate::ports::notifier::Notice;
use crate::ports::selection::{SelectedItem, SelectionProvider};
use crate::resolver::LinkResolver;
use crate::sequence::lookup_path;

/// Host class of timeline items that carry media.
pub const TRACK_ITEM_CLASS: &str = "TrackItem";
/// Host class of node-graph nodes that read media.
pub const READ_NODE_CLASS: &str = "Read";

/// Which host integration is driving the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostVariant {
    /// Timeline editor: resolves selected track items.
    Timeline,
    /// Node-graph compositor: resolves selected read nodes.
    NodeGraph,
}

impl HostVariant {
    /// The short-path policy the host's mount layout calls for.
    #[must_use]
    pub fn default_policy(self) -> PolicyKind {
        match self {
            Self::Timeline => PolicyKind::PatternExtract,
            Self::NodeGraph => PolicyKind::PrefixStrip,
        }
    }

    fn empty_selection_message(self) -> &'static str {
        match self {
            Self::Timeline => "No track items selected.",
            Self::NodeGraph => "No nodes selected.",
        }
    }

    /// Extracts the media paths to resolve, or the notice that ends the run early.
    fn media_paths(self, items: &[SelectedItem]) -> Result<Vec<String>, Notice> {
        if self == Self::NodeGraph && items.iter().any(|item| item.class != READ_NODE_CLASS) {
            return Err(Notice::UnsupportedSelection {
                message: "Only Read nodes supported.".to_string(),
            });
        }

        let mut paths = Vec::new();
        for item in items {
            if self == Self::Timeline && item.class != TRACK_ITEM_CLASS {
                tracing::debug!(
                    name = %item.name,
                    class = %item.class,
                    "skipped, not a track item"
                );
                continue;
            }
            match item.path.as_deref().filter(|p| !p.is_empty()) {
                Some(path) => paths.push(path.to_string()),
                None => tracing::debug!(name = %item.name, "skipped, no media path"),
            }
        }
        Ok(paths)
    }
}

/// Resolves the host selection and copies every valid link to the clipboard.
///
/// Paths that fail to resolve are logged and left out. The clipboard is only
/// written when at least one link resolved. The returned notice is not shown;
/// pass it to the context's notifier.
///
/// # Errors
///
/// Returns an error string if the clipboard write fails.
pub async fn copy_links(
    ctx: &ServiceContext,
    provider: &dyn SelectionProvider,
    variant: HostVariant,
    policy: &NormalizationPolicy,
    config: &Config,
) -> Result<Notice, String> {
    let items = match provider.selected_items() {
        Ok(items) => items,
        Err(e) => {
            tracing::info!(error = %e, "no selection");
            return Ok(Notice::NoSelection {
                message: e.to_string(),
            });
        }
    };
    tracing::info!(count = items.len(), ?variant, "selected items");

    if items.is_empty() {
        return Ok(Notice::NoSelection {
            message: variant.empty_selection_message().to_string(),
        });
    }

    let paths = match variant.media_paths(&items) {
        Ok(paths) => paths,
        Err(notice) => return Ok(notice),
    };

    let resolver = LinkResolver::new(ctx, policy, &config.filespace);
    let mut links = Vec::new();
    for path in &paths {
        let lookup = lookup_path(path);
        match resolver.resolve(lookup).await {
            Ok(link) => links.push(link),
            Err(e) => tracing::warn!(path = %path, error = %e, "skipped invalid link"),
        }
    }

    if links.is_empty() {
        tracing::warn!(attempted = paths.len(), "no valid links found");
        return Ok(Notice::NoValidLinks);
    }

    let text = links
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    ctx.clipboard
        .set_text(&text)
        .map_err(|e| format!("Failed to copy links to clipboard: {e}"))?;
    tracing::info!(count = links.len(), "delivered links");

    Ok(Notice::delivered(links.len(), ctx.clipboard.is_stdout()))
}
