use std::path::PathBuf;

/// Error type for descriptor, scanner and renderer operations.
///
/// All variants are configuration or logic errors surfaced directly to the
/// command layer; none are transient and none are retried.
#[derive(Debug)]
pub enum ForgeError {
    /// Descriptor file absent or not well-formed JSON (strict load path)
    ConfigMissingOrInvalid(String),
    /// Required descriptor field absent at render time
    MissingField(&'static str),
    /// App or dependency alias already registered
    DuplicateName(String),
    /// App or dependency alias fails the folder-name pattern
    InvalidName(String),
    /// Operation references an app not present in the descriptor
    UnknownApp(String),
    /// Expected template, source directory or executable absent
    PathNotFound(PathBuf),
    /// Descriptor and filesystem disagree about app existence
    InconsistentState(String),
    /// External toolchain process exited non-zero
    ExternalCommandFailed {
        command: String,
        code: Option<i32>,
    },
    /// IO error
    Io(std::io::Error),
}

impl std::fmt::Display for ForgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForgeError::ConfigMissingOrInvalid(msg) => {
                write!(f, "project descriptor missing or invalid: {}", msg)
            }
            ForgeError::MissingField(field) => {
                write!(f, "required descriptor field '{}' is not set", field)
            }
            ForgeError::DuplicateName(name) => write!(f, "name '{}' is already registered", name),
            ForgeError::InvalidName(name) => write!(
                f,
                "invalid name '{}': use only A-Z, a-z, 0-9, '-' and '_'",
                name
            ),
            ForgeError::UnknownApp(name) => write!(f, "app '{}' doesn't exist", name),
            ForgeError::PathNotFound(path) => write!(f, "path not found: {}", path.display()),
            ForgeError::InconsistentState(msg) => write!(f, "broken project state: {}", msg),
            ForgeError::ExternalCommandFailed { command, code } => match code {
                Some(code) => write!(f, "command '{}' failed with exit code {}", command, code),
                None => write!(f, "command '{}' was terminated by a signal", command),
            },
            ForgeError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ForgeError {}

impl From<std::io::Error> for ForgeError {
    fn from(e: std::io::Error) -> Self {
        ForgeError::Io(e)
    }
}
