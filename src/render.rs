//! Manifest rendering: descriptor + source tree -> CMake configuration files.
//!
//! Rendering is a pure, stateless transform. Every call re-reads the source
//! tree from scratch and substitutes the template placeholders textually;
//! for a fixed descriptor and a fixed tree the output is byte-identical
//! across runs.
//!
//! Dependency policy: the root manifest's `{{EXTERNAL_DEPENDENCIES}}` block
//! always renders empty and the core manifest's `{{LIBRARIES}}` block is the
//! verbatim content of the user-editable `CorePackages.cmake`. Dependency
//! records in the descriptor are carried for compatibility but do not feed
//! the rendered output.

use crate::descriptor::{self, ProjectDescriptor};
use crate::error::ForgeError;
use crate::scanner::find_cpp_files;
use crate::templates;
use std::fs;
use std::path::{Path, PathBuf};

/// Side file read verbatim into the core manifest's libraries block.
pub const CORE_PACKAGES_FILE: &str = "CorePackages.cmake";

/// The complete set of manifests for one render pass, staged in memory so a
/// failure mid-render never leaves a truncated or half-updated file on disk.
#[derive(Debug)]
pub struct RenderedManifests {
    pub root: String,
    pub core: String,
    pub apps: Vec<(String, String)>,
}

/// Renders the top-level manifest: project name plus one inclusion directive
/// per registered app, in descriptor order.
pub fn render_root(descriptor: &ProjectDescriptor) -> Result<String, ForgeError> {
    if descriptor.project_name.is_empty() {
        return Err(ForgeError::MissingField("PROJECT_NAME"));
    }

    let mut inclusions = String::new();
    for app in &descriptor.apps {
        inclusions.push_str(&format!("add_subdirectory(apps/{})\n", app));
    }

    let rendered = templates::CMAKELISTS_ROOT
        .replace("{{PROJ_NAME}}", &descriptor.project_name)
        .replace("{{EXTERNAL_DEPENDENCIES}}", "")
        .replace("{{APP_INCLUSIONS}}", &inclusions);
    Ok(rendered)
}

/// Renders the core-library manifest from a fresh scan of `core/` and the
/// `CorePackages.cmake` side file.
pub fn render_core(root: &Path, _descriptor: &ProjectDescriptor) -> Result<String, ForgeError> {
    let sources = find_cpp_files(&root.join("core"))?;

    let packages_path = root.join(CORE_PACKAGES_FILE);
    if !packages_path.exists() {
        return Err(ForgeError::PathNotFound(packages_path));
    }
    let libraries = fs::read_to_string(&packages_path)?;

    let rendered = templates::CMAKELISTS_CORE
        .replace("{{SRC_FILES}}", &source_block(&sources))
        .replace("{{LIBRARIES}}", &libraries);
    Ok(rendered)
}

/// Renders one app manifest from a fresh scan of `apps/<name>`.
pub fn render_app(
    root: &Path,
    descriptor: &ProjectDescriptor,
    app: &str,
) -> Result<String, ForgeError> {
    if !descriptor.apps.iter().any(|a| a == app) {
        return Err(ForgeError::UnknownApp(app.to_string()));
    }

    let sources = find_cpp_files(&root.join("apps").join(app))?;
    let rendered = templates::CMAKELISTS_APP
        .replace("{{SRC_FILES}}", &source_block(&sources))
        .replace("{{APP_NAME}}", app);
    Ok(rendered)
}

/// Stages the root, core and every app manifest without touching disk.
pub fn stage_all(
    root: &Path,
    descriptor: &ProjectDescriptor,
) -> Result<RenderedManifests, ForgeError> {
    descriptor::verify_app_layout(root, descriptor)?;

    let rendered_root = render_root(descriptor)?;
    let rendered_core = render_core(root, descriptor)?;

    let mut apps = Vec::new();
    for app in &descriptor.apps {
        apps.push((app.clone(), render_app(root, descriptor, app)?));
    }

    Ok(RenderedManifests {
        root: rendered_root,
        core: rendered_core,
        apps,
    })
}

/// Renders and persists every manifest. All targets are staged in memory
/// first, so any failure aborts before a single file is overwritten. Returns
/// the written paths.
pub fn render_all(root: &Path, descriptor: &ProjectDescriptor) -> Result<Vec<PathBuf>, ForgeError> {
    let staged = stage_all(root, descriptor)?;

    let mut written = Vec::new();

    let root_path = root.join("CMakeLists.txt");
    fs::write(&root_path, &staged.root)?;
    written.push(root_path);

    let core_path = root.join("core").join("CMakeLists.txt");
    fs::write(&core_path, &staged.core)?;
    written.push(core_path);

    for (app, content) in &staged.apps {
        let app_path = root.join("apps").join(app).join("CMakeLists.txt");
        fs::write(&app_path, content)?;
        written.push(app_path);
    }

    Ok(written)
}

/// One quoted relative path per line, indented to sit inside the manifest's
/// source-list parentheses.
fn source_block(sources: &[String]) -> String {
    let mut block = String::new();
    for file in sources {
        block.push_str(&format!("    \"{}\"\n", file));
    }
    block
}
