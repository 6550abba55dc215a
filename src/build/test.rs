//! Test runner passthrough (`cxf test`).

use super::BUILD_DIR;
use crate::error::ForgeError;
use crate::exec;
use colored::*;
use std::path::Path;

/// Runs `ctest` inside the configured build tree.
pub fn run_tests(root: &Path) -> Result<(), ForgeError> {
    let build_dir = root.join(BUILD_DIR);
    if !build_dir.exists() {
        return Err(ForgeError::PathNotFound(build_dir));
    }

    println!("{} Running tests...", "🧪".magenta());
    exec::invoke("ctest", &["--output-on-failure"], &build_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_configured_tree() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            run_tests(dir.path()),
            Err(ForgeError::PathNotFound(_))
        ));
    }
}
