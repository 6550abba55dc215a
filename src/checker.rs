//! Code formatting passthrough (`cxf fmt`).

use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Runs clang-format in place over every C++ source and header under
/// `core/` and `apps/`.
pub fn format_code(root: &Path) -> Result<()> {
    if Command::new("clang-format")
        .arg("--version")
        .output()
        .is_err()
    {
        println!("{} clang-format not found.", "x".red());
        return Ok(());
    }

    println!("{} Formatting source code...", "🎨".magenta());

    let files = collect_source_files(root);
    if files.is_empty() {
        println!("{} No source files found to format.", "!".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut formatted_count = 0;
    for path in &files {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        pb.set_message(format!("Formatting {}", name));

        let status = Command::new("clang-format").arg("-i").arg(path).status();
        if let Ok(s) = status
            && s.success()
        {
            formatted_count += 1;
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    println!("{} Formatted {} files.", "✓".green(), formatted_count);
    Ok(())
}

fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for tree in ["core", "apps"] {
        let tree_root = root.join(tree);
        if !tree_root.exists() {
            continue;
        }
        for entry in WalkDir::new(&tree_root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path().to_path_buf();
            if let Some(ext) = path.extension() {
                let s = ext.to_string_lossy();
                if ["cpp", "hpp"].contains(&s.as_ref()) {
                    files.push(path);
                }
            }
        }
    }
    files
}
