//! External process collaborator.
//!
//! The toolchain (cmake, ninja, ctest, clang-format) is launched and waited
//! on synchronously; its exit status becomes this tool's own success or
//! failure signal. The core never interprets compiler output.

use crate::error::ForgeError;
use std::path::Path;
use std::process::Command;

/// Runs `program` with `args` in `working_dir`, blocking until it exits.
/// A non-zero exit surfaces as `ExternalCommandFailed` carrying the status.
pub fn invoke(program: &str, args: &[&str], working_dir: &Path) -> Result<(), ForgeError> {
    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(ForgeError::ExternalCommandFailed {
            command: display_command(program, args),
            code: status.code(),
        })
    }
}

/// Command line as shown in error messages and pre-run logging.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
