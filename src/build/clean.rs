//! Build artifact cleanup (`cxf clean`).

use super::BUILD_DIR;
use crate::error::ForgeError;
use colored::*;
use std::fs;
use std::path::Path;

/// Removes the build directory. A missing directory is reported, not an
/// error, so `clean` is safe to run on a fresh checkout.
pub fn clean(root: &Path) -> Result<(), ForgeError> {
    let build_dir = root.join(BUILD_DIR);
    if !build_dir.exists() {
        println!("{} No such directory: {}", "!".yellow(), BUILD_DIR);
        return Ok(());
    }

    println!("Removing build directory: {}", BUILD_DIR);
    fs::remove_dir_all(&build_dir)?;
    println!("{} Clean complete.", "✓".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_build_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(BUILD_DIR).join("apps")).unwrap();
        fs::write(dir.path().join(BUILD_DIR).join("x.ninja"), "").unwrap();

        clean(dir.path()).unwrap();
        assert!(!dir.path().join(BUILD_DIR).exists());
    }

    #[test]
    fn test_clean_on_fresh_checkout_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        clean(dir.path()).unwrap();
    }
}
