//! Incremental build and app launch (`cxf build`, `cxf run`).

use super::BUILD_DIR;
use crate::descriptor;
use crate::error::ForgeError;
use crate::exec;
use std::path::Path;

/// Runs `cmake --build .` in the configured build tree, optionally limited
/// to one app target. `force` clears Ninja's state first so everything
/// recompiles.
pub fn build_target(root: &Path, target: Option<&str>, force: bool) -> Result<(), ForgeError> {
    let config = descriptor::load_or_default(root);
    if let Some(target) = target
        && !config.apps.iter().any(|a| a == target)
    {
        return Err(ForgeError::UnknownApp(target.to_string()));
    }

    let build_dir = root.join(BUILD_DIR);
    if !build_dir.exists() {
        return Err(ForgeError::PathNotFound(build_dir));
    }

    if force {
        exec::invoke("ninja", &["-t", "clean"], &build_dir)?;
    }

    match target {
        Some(target) => exec::invoke("cmake", &["--build", ".", "--target", target], &build_dir),
        None => exec::invoke("cmake", &["--build", "."], &build_dir),
    }
}

/// Launches a built app executable, blocking until it exits.
///
/// The platform decides whether the binary carries an `.exe` suffix; the
/// descriptor decides whether the app exists at all.
pub fn run_app(root: &Path, app: &str) -> Result<(), ForgeError> {
    let config = descriptor::load_or_default(root);
    if !config.apps.iter().any(|a| a == app) {
        return Err(ForgeError::UnknownApp(app.to_string()));
    }

    let exe_name = if cfg!(windows) {
        format!("{}.exe", app)
    } else {
        app.to_string()
    };
    let exe_path = root.join(BUILD_DIR).join("apps").join(app).join(exe_name);
    if !exe_path.exists() {
        return Err(ForgeError::PathNotFound(exe_path));
    }

    exec::invoke(&exe_path.to_string_lossy(), &[], root)
}
