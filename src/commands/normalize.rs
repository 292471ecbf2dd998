//! `lucidlink normalize` command.

use crate::normalize::NormalizationPolicy;
use crate::sequence::{is_sequence_path, lookup_path};

/// Print the lookup path and short path `path` would resolve through.
///
/// # Errors
///
/// Returns an error string if the path does not normalize under `policy`.
pub fn run(policy: &NormalizationPolicy, path: &str) -> Result<(), String> {
    let lookup = lookup_path(path);
    let short = policy.normalize(lookup).map_err(|e| e.to_string())?;

    println!("policy:      {}", policy.name());
    println!(
        "sequence:    {}",
        if is_sequence_path(path) { "yes" } else { "no" }
    );
    println!("lookup path: {}", policy.local_path(lookup));
    println!("short path:  {short}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::normalize::NormalizationPolicy;

    #[test]
    fn normalizes_sequence_through_parent() {
        let policy = NormalizationPolicy::PatternExtract {
            marker: "active_projects/".into(),
        };
        assert!(run(&policy, "/v/active_projects/job/render.%04d.exr").is_ok());
    }

    #[test]
    fn reports_invalid_path() {
        let policy = NormalizationPolicy::PrefixStrip {
            mount_prefix: "/Volumes/sandwich-post/".into(),
        };
        let err = run(&policy, "/tmp/render.exr").unwrap_err();
        assert!(err.contains("not under mount prefix"));
    }
}
