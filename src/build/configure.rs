//! CMake configure step (`cxf configure`).
//!
//! Generates the Ninja build tree with clang as the compiler and the
//! clang-tidy wrapper hooked into every C++ compile, then runs a first
//! build. The descriptor's `CLANG_FLAGS` are forwarded verbatim.

use super::BUILD_DIR;
use crate::descriptor;
use crate::error::ForgeError;
use crate::exec;
use crate::templates;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub fn configure_and_build(root: &Path) -> Result<(), ForgeError> {
    let config = descriptor::load_or_default(root);

    let build_dir = root.join(BUILD_DIR);
    fs::create_dir_all(&build_dir)?;
    let wrapper = write_clang_tidy_wrapper(root)?;
    let wrapper = wrapper.canonicalize().unwrap_or(wrapper);

    let tidy_arg = format!("-DCMAKE_CXX_CLANG_TIDY={}", wrapper.display());
    let flags_arg = format!("-DCMAKE_CXX_FLAGS={}", config.clang_flags);
    let args = [
        "-G",
        "Ninja",
        "-DCMAKE_VERBOSE_MAKEFILE=ON",
        "-DCMAKE_BUILD_TYPE=Debug",
        "-DCMAKE_C_COMPILER=clang",
        "-DCMAKE_CXX_COMPILER=clang++",
        tidy_arg.as_str(),
        flags_arg.as_str(),
        "..",
    ];

    println!(
        "   {}",
        exec::display_command("cmake", &args).dimmed()
    );
    exec::invoke("cmake", &args, &build_dir)?;
    exec::invoke("cmake", &["--build", "."], &build_dir)?;
    Ok(())
}

/// Writes the clang-tidy wrapper script into the build directory and marks
/// it executable. CMake calls it once per translation unit.
pub fn write_clang_tidy_wrapper(root: &Path) -> Result<PathBuf, ForgeError> {
    let build_dir = root.join(BUILD_DIR);
    fs::create_dir_all(&build_dir)?;

    let path = build_dir.join("clangtidy.sh");
    fs::write(&path, templates::CLANG_TIDY_WRAPPER)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}
