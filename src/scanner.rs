//! Compiled-source discovery for manifest rendering.
//!
//! Walks a directory tree and returns every `.cpp` file as a path relative
//! to the walked root, with `/` separators regardless of platform so the
//! rendered manifests stay byte-identical across hosts. Entries are sorted
//! by file name during traversal: the same tree always yields the same
//! sequence, which keeps `render` reruns stable.

use crate::error::ForgeError;
use std::path::Path;
use walkdir::WalkDir;

/// Returns all `.cpp` files under `root`, relative to `root`.
///
/// Fails with `PathNotFound` if `root` does not exist; an existing but
/// empty tree yields an empty list.
pub fn find_cpp_files(root: &Path) -> Result<Vec<String>, ForgeError> {
    if !root.exists() {
        return Err(ForgeError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "cpp") {
            let relative = path.strip_prefix(root).unwrap_or(path);
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            files.push(parts.join("/"));
        }
    }

    Ok(files)
}
