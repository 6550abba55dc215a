//! # cxforge - Multi-App C++ Workspace Manager
//!
//! cxforge (`cxf`) scaffolds and orchestrates multi-app C++ projects built
//! around a shared `core` library. It keeps a JSON project descriptor in
//! sync with the source tree and regenerates the CMake manifests for every
//! target from string templates.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a new project and an app
//! cxf new myproject
//! cxf app tool
//!
//! # Regenerate manifests and build
//! cxf reload
//! cxf run tool
//! ```
//!
//! ## Module Organization
//!
//! - [`descriptor`] - Descriptor persistence (`.project.config.json`)
//! - [`scanner`] - Source-file discovery for manifest rendering
//! - [`render`] - Manifest rendering (root, core, per-app)
//! - [`project`] - Scaffolding operations
//! - [`build`] - CMake/Ninja passthroughs

/// Passthroughs to the CMake/Ninja toolchain.
pub mod build;

/// Code formatting passthrough (clang-format).
pub mod checker;

/// Project descriptor persistence and validation.
pub mod descriptor;

/// Typed errors for descriptor, scanner and renderer operations.
pub mod error;

/// External process collaborator.
pub mod exec;

/// IDE configuration generator (VSCode).
pub mod ide;

/// Scaffolding operations (project, apps, dependencies).
pub mod project;

/// Manifest rendering from descriptor plus source tree.
pub mod render;

/// Compiled-source discovery.
pub mod scanner;

/// Build-manifest templates and starter sources.
pub mod templates;
