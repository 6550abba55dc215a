//! Project descriptor persistence (`.project.config.json`).
//!
//! The descriptor is the single source of truth for the project name, the
//! registered apps, the declared external dependencies and the compiler
//! flags. It is loaded at the start of a command and saved right after every
//! mutation; no ambient global state is kept in between.

use crate::error::ForgeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed project-relative path of the persisted descriptor.
pub const DESCRIPTOR_FILE: &str = ".project.config.json";

/// Key names follow the canonical wire format so descriptors written by
/// earlier versions of the tool keep loading unchanged.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    #[serde(rename = "PROJECT_NAME", default)]
    pub project_name: String,

    #[serde(rename = "APPS", default)]
    pub apps: Vec<String>,

    #[serde(rename = "EXTERNAL_DEPENDENCIES", default)]
    pub external_dependencies: Vec<ExternalDependency>,

    #[serde(rename = "CLANG_FLAGS", default)]
    pub clang_flags: String,
}

/// Deprecated surface kept for compatibility: dependency wiring is expected
/// to live in the user-editable `CorePackages.cmake` instead (see
/// `render::render_core`), but descriptors carrying these records still load
/// and save round-trip clean.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExternalDependency {
    #[serde(rename = "ALIAS")]
    pub alias: String,

    #[serde(rename = "GIT_REPOSITORY")]
    pub git_repository: String,

    #[serde(rename = "GIT_TAG")]
    pub git_tag: String,

    #[serde(rename = "LIBRARY_LINK", default)]
    pub library_link: String,

    #[serde(rename = "HAS_CMAKE_TARGET", default = "default_true")]
    pub has_cmake_target: bool,
}

fn default_true() -> bool {
    true
}

/// Strict load: rendering and other callers that cannot work from an empty
/// descriptor use this and fail when the file is absent or malformed.
pub fn load(root: &Path) -> Result<ProjectDescriptor, ForgeError> {
    let path = root.join(DESCRIPTOR_FILE);
    let raw = fs::read_to_string(&path)
        .map_err(|e| ForgeError::ConfigMissingOrInvalid(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| ForgeError::ConfigMissingOrInvalid(format!("{}: {}", path.display(), e)))
}

/// Non-strict load: build and run commands degrade to an empty descriptor
/// when the file is absent or unreadable.
pub fn load_or_default(root: &Path) -> ProjectDescriptor {
    load(root).unwrap_or_default()
}

/// Serializes the full descriptor, overwriting the backing file. Saving an
/// unmodified descriptor and reloading it yields an equal value.
pub fn save(root: &Path, descriptor: &ProjectDescriptor) -> Result<(), ForgeError> {
    let path = root.join(DESCRIPTOR_FILE);
    let raw = serde_json::to_string_pretty(descriptor)
        .map_err(|e| ForgeError::ConfigMissingOrInvalid(e.to_string()))?;
    fs::write(&path, raw)?;
    Ok(())
}

/// Returns the registered app names; empty if unset. Never fails.
pub fn list_apps(descriptor: &ProjectDescriptor) -> &[String] {
    &descriptor.apps
}

/// Filesystem-safe identifier check: non-empty, alphanumerics plus `-` and
/// `_` only. No spaces, no path separators.
pub fn is_valid_folder_name(name: &str) -> bool {
    let pattern = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    pattern.is_match(name)
}

/// Checks both directions of the descriptor ↔ `apps/` agreement: every
/// registered app must have a directory, and every directory under `apps/`
/// must be registered. A mismatch is surfaced, never silently repaired.
pub fn verify_app_layout(root: &Path, descriptor: &ProjectDescriptor) -> Result<(), ForgeError> {
    for app in &descriptor.apps {
        if !root.join("apps").join(app).is_dir() {
            return Err(ForgeError::InconsistentState(format!(
                "app '{}' exists in the descriptor but not in the apps directory",
                app
            )));
        }
    }

    let apps_dir = root.join("apps");
    if apps_dir.is_dir() {
        for entry in fs::read_dir(&apps_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if !descriptor.apps.iter().any(|a| *a == name) {
                return Err(ForgeError::InconsistentState(format!(
                    "directory 'apps/{}' exists but is not registered in the descriptor",
                    name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = ProjectDescriptor {
            project_name: "demo".into(),
            apps: vec!["tool".into(), "viewer".into()],
            external_dependencies: vec![ExternalDependency {
                alias: "fmt".into(),
                git_repository: "https://github.com/fmtlib/fmt.git".into(),
                git_tag: "9.1.0".into(),
                library_link: "fmt::fmt".into(),
                has_cmake_target: true,
            }],
            clang_flags: "-Wall -Wextra -O2 -g".into(),
        };

        save(dir.path(), &descriptor).unwrap();
        let reloaded = load(dir.path()).unwrap();
        assert_eq!(descriptor, reloaded);

        // Saving the unmodified value again must not change the file.
        let first = fs::read_to_string(dir.path().join(DESCRIPTOR_FILE)).unwrap();
        save(dir.path(), &reloaded).unwrap();
        let second = fs::read_to_string(dir.path().join(DESCRIPTOR_FILE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wire_format_keys() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = ProjectDescriptor {
            project_name: "demo".into(),
            ..Default::default()
        };
        save(dir.path(), &descriptor).unwrap();

        let raw = fs::read_to_string(dir.path().join(DESCRIPTOR_FILE)).unwrap();
        assert!(raw.contains("\"PROJECT_NAME\""));
        assert!(raw.contains("\"APPS\""));
        assert!(raw.contains("\"CLANG_FLAGS\""));
    }

    #[test]
    fn test_load_missing_is_strict_error() {
        let dir = tempfile::tempdir().unwrap();
        match load(dir.path()) {
            Err(ForgeError::ConfigMissingOrInvalid(_)) => {}
            other => panic!("expected ConfigMissingOrInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_is_strict_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DESCRIPTOR_FILE), "{ not json").unwrap();
        assert!(matches!(
            load(dir.path()),
            Err(ForgeError::ConfigMissingOrInvalid(_))
        ));
    }

    #[test]
    fn test_load_or_default_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = load_or_default(dir.path());
        assert!(descriptor.project_name.is_empty());
        assert!(list_apps(&descriptor).is_empty());
    }

    #[test]
    fn test_legacy_descriptor_without_optional_keys() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DESCRIPTOR_FILE),
            r#"{ "PROJECT_NAME": "old", "APPS": ["one"] }"#,
        )
        .unwrap();

        let descriptor = load(dir.path()).unwrap();
        assert_eq!(descriptor.project_name, "old");
        assert_eq!(descriptor.apps, vec!["one".to_string()]);
        assert!(descriptor.external_dependencies.is_empty());
        assert_eq!(descriptor.clang_flags, "");
    }

    #[test]
    fn test_is_valid_folder_name() {
        assert!(is_valid_folder_name("my-app_1"));
        assert!(is_valid_folder_name("Viewer2"));
        assert!(!is_valid_folder_name(""));
        assert!(!is_valid_folder_name("my app"));
        assert!(!is_valid_folder_name("app/sub"));
        assert!(!is_valid_folder_name("app."));
    }

    #[test]
    fn test_verify_app_layout_both_directions() {
        let dir = tempfile::tempdir().unwrap();
        let mut descriptor = ProjectDescriptor {
            project_name: "demo".into(),
            apps: vec!["tool".into()],
            ..Default::default()
        };

        // Registered but no directory.
        assert!(matches!(
            verify_app_layout(dir.path(), &descriptor),
            Err(ForgeError::InconsistentState(_))
        ));

        fs::create_dir_all(dir.path().join("apps").join("tool")).unwrap();
        verify_app_layout(dir.path(), &descriptor).unwrap();

        // Directory present but not registered.
        fs::create_dir_all(dir.path().join("apps").join("rogue")).unwrap();
        descriptor.apps = vec!["tool".into()];
        assert!(matches!(
            verify_app_layout(dir.path(), &descriptor),
            Err(ForgeError::InconsistentState(_))
        ));
    }
}
