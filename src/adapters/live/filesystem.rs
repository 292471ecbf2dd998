//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk metadata.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_directories_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plate.mov");
        std::fs::write(&file, b"").unwrap();

        assert!(LiveFileSystem.is_dir(dir.path()));
        assert!(!LiveFileSystem.is_dir(&file));
        assert!(!LiveFileSystem.is_dir(&dir.path().join("missing")));
    }
}
