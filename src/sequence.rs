//! Frame-sequence detection.
//!
//! Media pipelines name image sequences with a printf padding token such as
//! `render.%04d.exr`. No file with that literal name exists, so sequences are
//! looked up through their parent directory instead.

use std::sync::LazyLock;

use regex::Regex;

static PADDING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\d*d").expect("padding token pattern is valid"));

/// Returns `true` if the path contains a printf frame-padding token (`%d`, `%04d`, ...).
#[must_use]
pub fn is_sequence_path(path: &str) -> bool {
    let found = PADDING_TOKEN.is_match(path);
    if found {
        tracing::debug!(path, "detected sequence pattern");
    }
    found
}

/// Returns the path to resolve for a media reference.
///
/// Sequences resolve through their parent directory, single files through
/// themselves.
#[must_use]
pub fn lookup_path(path: &str) -> &str {
    if is_sequence_path(path) {
        dirname(path)
    } else {
        path
    }
}

/// String `dirname`: everything before the last `/`, keeping a bare root.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_padded_and_unpadded_tokens() {
        assert!(is_sequence_path("/a/b/render.%04d.exr"));
        assert!(is_sequence_path("/a/b/render.%d.exr"));
        assert!(is_sequence_path("/a/b/render.%08d.dpx"));
    }

    #[test]
    fn plain_files_are_not_sequences() {
        assert!(!is_sequence_path("/a/b/render.exr"));
        assert!(!is_sequence_path("/a/b/100%.mov"));
        assert!(!is_sequence_path("/a/b/render.%04x.exr"));
    }

    #[test]
    fn sequence_resolves_through_parent_directory() {
        assert_eq!(
            lookup_path("/Volumes/sandwich-post/active_projects/job/comp/render.%04d.exr"),
            "/Volumes/sandwich-post/active_projects/job/comp"
        );
    }

    #[test]
    fn single_file_resolves_through_itself() {
        let path = "/Volumes/sandwich-post/active_projects/job/plate.mov";
        assert_eq!(lookup_path(path), path);
    }

    #[test]
    fn dirname_edge_cases() {
        assert_eq!(dirname("/render.%04d.exr"), "/");
        assert_eq!(dirname("render.%04d.exr"), "");
        assert_eq!(dirname("a/b/"), "a/b");
    }
}
