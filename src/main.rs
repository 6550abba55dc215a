//! # cxforge CLI Entry Point
//!
//! This is the main executable for the `cxf` command-line tool.
//! It parses CLI arguments using clap and routes commands to the appropriate handlers.
//!
//! ## Command Structure
//!
//! - **Project**: `new`, `app`, `add`
//! - **Manifests**: `render`, `reload`, `setup-ide`
//! - **Build**: `configure`, `build`, `run`, `test`, `clean`, `fmt`

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use inquire::{Confirm, Text};
use std::env;
use std::path::Path;

use cxforge::build;
use cxforge::checker;
use cxforge::descriptor;
use cxforge::descriptor::ExternalDependency;
use cxforge::ide;
use cxforge::project;
use cxforge::render;

#[derive(Parser)]
#[command(name = "cxf")]
#[command(about = "Multi-app C++ workspace manager", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project in the current directory
    New {
        /// Project name (optional, defaults to interactive)
        name: Option<String>,
    },
    /// Add a new app to the project
    App {
        /// App name (optional, defaults to interactive)
        name: Option<String>,
    },
    /// Register an external dependency (deprecated; edit CorePackages.cmake instead)
    Add {
        /// Dependency alias (CMake target of the library)
        alias: Option<String>,
        /// Git repository URL
        #[arg(long)]
        git: Option<String>,
        /// Git tag (version)
        #[arg(long)]
        tag: Option<String>,
        /// Library link directive (e.g. "fmt::fmt")
        #[arg(long)]
        link: Option<String>,
        /// The library has no CMake target of its own
        #[arg(long)]
        no_cmake_target: bool,
    },
    /// Regenerate the CMake manifests from the descriptor
    Render,
    /// Render manifests, configure the build tree and refresh IDE config
    Reload,
    /// Generate the Ninja build tree (cmake -G Ninja) and build it
    Configure,
    /// Build the whole project or a single app
    Build {
        /// App target name (default: everything)
        target: Option<String>,
        /// Clear Ninja state first so everything recompiles
        #[arg(long)]
        force: bool,
    },
    /// Run a built app binary
    Run {
        /// App name
        app: String,
    },
    /// Run the project's ctest suite
    Test,
    /// Remove the build directory
    Clean,
    /// Format core/ and apps/ sources with clang-format
    Fmt,
    /// Generate VSCode debug configuration (launch.json)
    SetupIde,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = env::current_dir()?;

    match &cli.command {
        Some(Commands::New { name }) => create_project_flow(&root, name),
        Some(Commands::App { name }) => create_app_flow(&root, name),
        Some(Commands::Add {
            alias,
            git,
            tag,
            link,
            no_cmake_target,
        }) => add_dependency_flow(&root, alias, git, tag, link, *no_cmake_target),
        Some(Commands::Render) => render_manifests(&root),
        Some(Commands::Reload) => reload(&root),
        Some(Commands::Configure) => {
            build::configure_and_build(&root)?;
            Ok(())
        }
        Some(Commands::Build { target, force }) => {
            build::build_target(&root, target.as_deref(), *force)?;
            Ok(())
        }
        Some(Commands::Run { app }) => {
            if app == "core" {
                println!(
                    "{} core is the shared library; it is not intended to be run individually.",
                    "x".red()
                );
                std::process::exit(1);
            }
            build::run_app(&root, app)?;
            Ok(())
        }
        Some(Commands::Test) => {
            build::run_tests(&root)?;
            Ok(())
        }
        Some(Commands::Clean) => {
            build::clean(&root)?;
            Ok(())
        }
        Some(Commands::Fmt) => checker::format_code(&root),
        Some(Commands::SetupIde) => {
            let config = descriptor::load(&root)?;
            ide::render_debug_config_vscode(&root, &config)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            print_overview();
            Ok(())
        }
    }
}

fn print_overview() {
    println!();
    println!("   {}", "cxforge".bold().cyan());
    println!("   {}", "Multi-app C++ workspace manager".dimmed().italic());
    println!("   {}", format!("v{}", env!("CARGO_PKG_VERSION")).green());
    println!();
    println!(
        "   {}: {}, {}, {}",
        "Start".bold(),
        "new".cyan(),
        "app".cyan(),
        "render".cyan()
    );
    println!(
        "   {}: {}, {}, {}, {}",
        "Build".bold(),
        "configure".cyan(),
        "build".cyan(),
        "run".cyan(),
        "test".cyan()
    );
    println!(
        "   {}: {}, {}, {}",
        "Tools".bold(),
        "fmt".cyan(),
        "clean".cyan(),
        "setup-ide".cyan()
    );
    println!();
    println!("   Run {} for detailed usage.", "cxf --help".white().bold());
    println!();
}

fn create_project_flow(root: &Path, name_opt: &Option<String>) -> Result<()> {
    let name = match name_opt {
        Some(n) => n.clone(),
        None => Text::new("New project name:").prompt()?,
    };

    project::create_project(root, &name)?;
    println!("{} Project {} has been created!", "✓".green(), name.bold());
    println!("   - {} added", descriptor::DESCRIPTOR_FILE);
    println!("   - core directory added");
    println!("   - {} added", render::CORE_PACKAGES_FILE);

    // Interactive wizard: keep adding apps until the user stops.
    if name_opt.is_none() {
        loop {
            let more = Confirm::new("Add a new app?").with_default(true).prompt()?;
            if !more {
                break;
            }
            let app_name = Text::new("New app name:").prompt()?;
            match project::create_app(root, &app_name) {
                Ok(()) => println!("{} App {} has been added!", "✓".green(), app_name.bold()),
                Err(e) => println!("{} {}", "x".red(), e),
            }
        }
    }

    render_manifests(root)?;
    let config = descriptor::load(root)?;
    ide::render_debug_config_vscode(root, &config)?;
    println!(
        "   Run {} to generate the Ninja build tree.",
        "cxf configure".white().bold()
    );
    Ok(())
}

fn create_app_flow(root: &Path, name_opt: &Option<String>) -> Result<()> {
    let name = match name_opt {
        Some(n) => n.clone(),
        None => Text::new("New app name:").prompt()?,
    };

    project::create_app(root, &name)?;
    println!("{} App {} has been added!", "✓".green(), name.bold());
    println!(
        "   Run {} to regenerate the manifests.",
        "cxf render".white().bold()
    );
    Ok(())
}

fn add_dependency_flow(
    root: &Path,
    alias: &Option<String>,
    git: &Option<String>,
    tag: &Option<String>,
    link: &Option<String>,
    no_cmake_target: bool,
) -> Result<()> {
    println!(
        "{} Descriptor dependency records are deprecated; dependency wiring lives in {}.",
        "!".yellow(),
        render::CORE_PACKAGES_FILE.cyan()
    );

    let alias = match alias {
        Some(a) => a.clone(),
        None => Text::new("Dependency name (CMake target of the library):").prompt()?,
    };
    let git_repository = match git {
        Some(g) => g.clone(),
        None => Text::new("Git repository:").prompt()?,
    };
    let git_tag = match tag {
        Some(t) => t.clone(),
        None => Text::new("Git repository tag (version):").prompt()?,
    };

    let dep = ExternalDependency {
        alias: alias.clone(),
        git_repository,
        git_tag,
        library_link: link.clone().unwrap_or_default(),
        has_cmake_target: !no_cmake_target,
    };
    project::add_external_dependency(root, dep)?;
    println!(
        "{} Dependency {} recorded in {}",
        "✓".green(),
        alias.bold(),
        descriptor::DESCRIPTOR_FILE
    );
    Ok(())
}

fn render_manifests(root: &Path) -> Result<()> {
    let config = descriptor::load(root)?;
    let written = render::render_all(root, &config)?;
    for path in &written {
        let shown = path.strip_prefix(root).unwrap_or(path);
        println!("   {} {}", "+".green(), shown.display());
    }
    println!("{} Rendered {} manifest(s).", "✓".green(), written.len());
    Ok(())
}

fn reload(root: &Path) -> Result<()> {
    render_manifests(root)?;
    println!("- CMake files have been rendered.");
    build::write_clang_tidy_wrapper(root)?;
    println!("- Clang-tidy wrapper has been copied to the build dir.");
    build::configure_and_build(root)?;
    println!("- CMake build directory has been created.");
    let config = descriptor::load(root)?;
    ide::render_debug_config_vscode(root, &config)?;
    println!("- Debug configuration for vscode has been added.");
    Ok(())
}
