//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

/// Nothing listens here, so any lookup fails fast.
const UNREACHABLE_SERVICE: &str = "http://127.0.0.1:9";

fn run_lucidlink(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_lucidlink");
    Command::new(bin)
        .args(args)
        .env("LUCIDLINK_LOOKUP_URL", UNREACHABLE_SERVICE)
        .env_remove("LUCIDLINK_RECORD")
        .env_remove("LUCIDLINK_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lucidlink binary")
}

fn write_selection(dir: &Path, contents: &str) -> String {
    let path = dir.join("selection.yaml");
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

#[test]
fn normalize_prints_short_and_lookup_paths() {
    let output = run_lucidlink(&[
        "normalize",
        "--policy",
        "prefix-strip",
        "file:///Volumes/sandwich-post/active_projects/job/comp v2/render.%04d.exr",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("lookup path: /Volumes/sandwich-post/active_projects/job/comp v2"));
    assert!(stdout.contains("short path:  active_projects/job/comp%20v2"));
    assert!(stdout.contains("sequence:    yes"));
}

#[test]
fn help_lists_host_commands() {
    let output = run_lucidlink(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("timeline"));
    assert!(stdout.contains("nodes"));
}

#[test]
fn resolve_against_unreachable_service_fails() {
    let output = run_lucidlink(&[
        "resolve",
        "/Volumes/sandwich-post/active_projects/job/a.mov",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("[Error] failed to get LucidLink for: active_projects/job/a.mov"));
    assert!(stderr.contains("No valid LucidLink URLs found."));
}

#[test]
fn nodes_rejects_non_read_nodes() {
    let dir = tempfile::tempdir().unwrap();
    let selection = write_selection(
        dir.path(),
        "items:\n  - {name: Read1, class: Read, path: /Volumes/sandwich-post/a.exr}\n  - {name: Merge1, class: Merge2}\n",
    );
    let output = run_lucidlink(&["nodes", "--selection", &selection]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("Get LucidLink: Only Read nodes supported."));
}

#[test]
fn nodes_with_empty_selection_reports_no_selection() {
    let dir = tempfile::tempdir().unwrap();
    let selection = write_selection(dir.path(), "items: []\n");
    let output = run_lucidlink(&["nodes", "--selection", &selection]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Get LucidLink: No nodes selected."));
}

#[test]
fn timeline_without_sequence_reports_no_selection() {
    let dir = tempfile::tempdir().unwrap();
    let selection = write_selection(dir.path(), "items: []\n");
    let output = run_lucidlink(&["timeline", "--selection", &selection]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Get LucidLink: No active sequence."));
}

#[test]
fn timeline_with_only_invalid_paths_reports_no_valid_links() {
    let dir = tempfile::tempdir().unwrap();
    let selection = write_selection(
        dir.path(),
        "sequence: edit_v001\nitems:\n  - {name: a, class: TrackItem, path: /Users/me/Desktop/a.mov}\n",
    );
    let output = run_lucidlink(&["timeline", "--selection", &selection, "--print"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("Get LucidLink: No valid LucidLink URLs found."));
    assert!(!stdout.contains("lucid://"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_lucidlink(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
