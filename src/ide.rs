//! VSCode debugger configuration generator (`cxf setup-ide`).
//!
//! Writes `.vscode/launch.json` with one gdb launch entry per registered
//! app. The file is derived entirely from the descriptor, so it is
//! overwritten on every call rather than merged.

use crate::descriptor::ProjectDescriptor;
use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::fs;
use std::path::Path;

pub fn render_debug_config_vscode(root: &Path, descriptor: &ProjectDescriptor) -> Result<()> {
    let mut configurations = Vec::new();
    for app in &descriptor.apps {
        configurations.push(json!({
            "name": format!("(gdb) Launch {}", app),
            "type": "cppdbg",
            "request": "launch",
            "program": format!("${{workspaceFolder}}/build/apps/{}/{}", app, app),
            "args": [],
            "stopAtEntry": false,
            "cwd": format!("${{workspaceFolder}}/apps/{}", app),
            "environment": [],
            "externalConsole": false,
            "MIMode": "gdb",
            "setupCommands": [
                {
                    "description": "Enable pretty-printing for gdb",
                    "text": "-enable-pretty-printing",
                    "ignoreFailures": true
                },
                {
                    "description": "Set Disassembly Flavor to Intel",
                    "text": "-gdb-set disassembly-flavor intel",
                    "ignoreFailures": true
                }
            ]
        }));
    }

    let launch_json = json!({
        "version": "0.2.0",
        "configurations": configurations,
    });

    let vscode_dir = root.join(".vscode");
    fs::create_dir_all(&vscode_dir).context("Failed to create .vscode directory")?;
    let formatted = serde_json::to_string_pretty(&launch_json)?;
    fs::write(vscode_dir.join("launch.json"), formatted).context("Failed to write launch.json")?;

    println!(
        "{} Debug configuration written for {} app(s).",
        "✓".green(),
        descriptor.apps.len()
    );
    Ok(())
}
