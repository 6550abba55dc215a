//! Scaffolding operations: project creation, app creation and dependency
//! registration.
//!
//! Each operation loads the descriptor, mutates it, and saves it back before
//! touching the on-disk layout, so the descriptor file is always the record
//! of what the tool has agreed to manage.

use crate::descriptor::{self, ExternalDependency, ProjectDescriptor};
use crate::error::ForgeError;
use crate::templates;
use std::fs;
use std::path::Path;

/// Default warning/optimization flags recorded for new projects.
pub const DEFAULT_CLANG_FLAGS: &str = "-Wall -Wextra -O2 -g";

/// Initializes the project layout: descriptor with defaults, the `core`
/// library skeleton, the editable `CorePackages.cmake` and a `.gitignore`.
/// Re-running on an existing project keeps any registered apps.
pub fn create_project(root: &Path, name: &str) -> Result<ProjectDescriptor, ForgeError> {
    let mut config = descriptor::load_or_default(root);
    config.project_name = name.to_string();
    if config.clang_flags.is_empty() {
        config.clang_flags = DEFAULT_CLANG_FLAGS.to_string();
    }
    descriptor::save(root, &config)?;

    fs::create_dir_all(root.join("core").join("src").join("core"))?;
    fs::create_dir_all(root.join("core").join("include").join("core"))?;
    fs::write(
        root.join("core").join("src").join("core").join("class.cpp"),
        templates::CORE_CLASS_CPP,
    )?;
    fs::write(
        root.join("core")
            .join("include")
            .join("core")
            .join("class.hpp"),
        templates::CORE_CLASS_HPP,
    )?;
    fs::write(
        root.join(crate::render::CORE_PACKAGES_FILE),
        templates::CORE_PACKAGES_STUB,
    )?;

    if !root.join(".gitignore").exists() {
        fs::write(root.join(".gitignore"), templates::GITIGNORE)?;
    }

    Ok(config)
}

/// Registers a new app in the descriptor and scaffolds its source subtree.
///
/// The descriptor and the `apps/` directory must agree before the operation
/// runs: an app present on only one side is reported as broken state, never
/// repaired by recreating the missing half.
pub fn create_app(root: &Path, name: &str) -> Result<(), ForgeError> {
    if !descriptor::is_valid_folder_name(name) {
        return Err(ForgeError::InvalidName(name.to_string()));
    }

    let mut config = descriptor::load_or_default(root);
    let registered = config.apps.iter().any(|a| a == name);
    let app_dir = root.join("apps").join(name);

    match (registered, app_dir.exists()) {
        (true, true) => return Err(ForgeError::DuplicateName(name.to_string())),
        (true, false) => {
            return Err(ForgeError::InconsistentState(format!(
                "app '{}' exists in the descriptor but not in the apps directory",
                name
            )));
        }
        (false, true) => {
            return Err(ForgeError::InconsistentState(format!(
                "directory 'apps/{}' exists but is not registered in the descriptor",
                name
            )));
        }
        (false, false) => {}
    }

    config.apps.push(name.to_string());
    descriptor::save(root, &config)?;

    fs::create_dir_all(app_dir.join("src").join("subdir"))?;
    fs::create_dir_all(app_dir.join("include").join("subdir"))?;
    fs::write(app_dir.join("main.cpp"), templates::APP_MAIN_CPP)?;
    fs::write(
        app_dir.join("src").join("subdir").join("class.cpp"),
        templates::APP_CLASS_CPP,
    )?;
    fs::write(
        app_dir.join("include").join("subdir").join("class.hpp"),
        templates::APP_CLASS_HPP,
    )?;

    Ok(())
}

/// Appends a dependency record to the descriptor. The record is kept for
/// compatibility with older descriptors; rendered manifests take their
/// dependency wiring from `CorePackages.cmake` instead.
pub fn add_external_dependency(root: &Path, dep: ExternalDependency) -> Result<(), ForgeError> {
    if !descriptor::is_valid_folder_name(&dep.alias) {
        return Err(ForgeError::InvalidName(dep.alias));
    }

    let mut config = descriptor::load_or_default(root);
    if config
        .external_dependencies
        .iter()
        .any(|d| d.alias == dep.alias)
    {
        return Err(ForgeError::DuplicateName(dep.alias));
    }

    config.external_dependencies.push(dep);
    descriptor::save(root, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::list_apps;

    #[test]
    fn test_create_project_writes_defaults_and_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_project(dir.path(), "demo").unwrap();

        assert_eq!(config.project_name, "demo");
        assert_eq!(config.clang_flags, DEFAULT_CLANG_FLAGS);
        assert!(dir.path().join("core/src/core/class.cpp").exists());
        assert!(dir.path().join("core/include/core/class.hpp").exists());
        assert!(dir.path().join("CorePackages.cmake").exists());
        assert!(dir.path().join(".gitignore").exists());

        let reloaded = descriptor::load(dir.path()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_create_project_keeps_existing_apps() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "demo").unwrap();
        create_app(dir.path(), "tool").unwrap();

        create_project(dir.path(), "renamed").unwrap();
        let config = descriptor::load(dir.path()).unwrap();
        assert_eq!(config.project_name, "renamed");
        assert_eq!(config.apps, vec!["tool".to_string()]);
    }

    #[test]
    fn test_create_app_registers_once() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "demo").unwrap();
        create_app(dir.path(), "foo").unwrap();

        let config = descriptor::load(dir.path()).unwrap();
        assert_eq!(
            list_apps(&config).iter().filter(|a| *a == "foo").count(),
            1
        );
        assert!(dir.path().join("apps/foo/main.cpp").exists());
        assert!(dir.path().join("apps/foo/src/subdir/class.cpp").exists());
        assert!(dir.path().join("apps/foo/include/subdir/class.hpp").exists());
    }

    #[test]
    fn test_create_app_duplicate_does_not_mutate() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "demo").unwrap();
        create_app(dir.path(), "foo").unwrap();
        let before = descriptor::load(dir.path()).unwrap();

        assert!(matches!(
            create_app(dir.path(), "foo"),
            Err(ForgeError::DuplicateName(_))
        ));
        assert_eq!(descriptor::load(dir.path()).unwrap(), before);
    }

    #[test]
    fn test_create_app_rejects_invalid_names() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "demo").unwrap();

        for bad in ["", "my app", "app/sub"] {
            assert!(matches!(
                create_app(dir.path(), bad),
                Err(ForgeError::InvalidName(_))
            ));
        }
        assert!(create_app(dir.path(), "my-app_1").is_ok());
    }

    #[test]
    fn test_create_app_detects_broken_state() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "demo").unwrap();

        // Registered in the descriptor, directory removed by hand.
        create_app(dir.path(), "gone").unwrap();
        fs::remove_dir_all(dir.path().join("apps").join("gone")).unwrap();
        assert!(matches!(
            create_app(dir.path(), "gone"),
            Err(ForgeError::InconsistentState(_))
        ));

        // Directory created by hand, never registered.
        fs::create_dir_all(dir.path().join("apps").join("rogue")).unwrap();
        assert!(matches!(
            create_app(dir.path(), "rogue"),
            Err(ForgeError::InconsistentState(_))
        ));
    }

    #[test]
    fn test_add_external_dependency_unique_alias() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "demo").unwrap();

        let dep = ExternalDependency {
            alias: "fmt".into(),
            git_repository: "https://github.com/fmtlib/fmt.git".into(),
            git_tag: "9.1.0".into(),
            library_link: "fmt::fmt".into(),
            has_cmake_target: true,
        };
        add_external_dependency(dir.path(), dep.clone()).unwrap();

        assert!(matches!(
            add_external_dependency(dir.path(), dep),
            Err(ForgeError::DuplicateName(_))
        ));

        let config = descriptor::load(dir.path()).unwrap();
        assert_eq!(config.external_dependencies.len(), 1);
    }
}
