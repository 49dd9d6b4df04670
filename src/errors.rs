// Error types and user-friendly error messages
//
// Typed errors for the export and training pipelines, plus helpers that turn
// environment failures into actionable messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::export::SUPPORTED_FORMATS;

/// Failures raised while talking to the detection framework
#[derive(Error, Debug)]
pub enum FrameworkError {
    /// The interpreter could not be started at all
    #[error("could not start '{interpreter}': {source}")]
    Unavailable {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    /// The framework ran but exited unsuccessfully
    #[error("framework exited with {status}: {detail}")]
    Failed { status: String, detail: String },

    /// The framework exited cleanly without reporting a result
    #[error("framework finished without reporting a result")]
    MissingResult,

    /// The reported result could not be decoded
    #[error("malformed framework result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("framework I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the export and training pipelines
#[derive(Error, Debug)]
pub enum ExportError {
    /// Requested export format is not in the supported set
    #[error(
        "Unsupported export format: {value}. Supported formats are: {}",
        SUPPORTED_FORMATS.join(", ")
    )]
    InvalidFormat { value: String },

    /// Checkpoint is missing on disk
    #[error("The model file {} does not exist.", .path.display())]
    ModelNotFound { path: PathBuf },

    /// Training dataset descriptor is missing on disk
    #[error("The dataset descriptor {} does not exist.", .path.display())]
    DatasetNotFound { path: PathBuf },

    /// A training parameter is out of range
    #[error("Invalid training parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Anything raised by the framework during load, bind, export or train
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl ExportError {
    /// Whether the caller can fix this by changing the invocation
    pub fn is_caller_correctable(&self) -> bool {
        matches!(
            self,
            ExportError::InvalidFormat { .. }
                | ExportError::ModelNotFound { .. }
                | ExportError::DatasetNotFound { .. }
                | ExportError::InvalidParameter { .. }
        )
    }

    /// Process exit status for this error
    ///
    /// 2 for usage mistakes, 1 for environment or framework failures.
    pub fn exit_code(&self) -> u8 {
        if self.is_caller_correctable() {
            2
        } else {
            1
        }
    }
}

/// Format a framework-unavailable error with helpful suggestions
pub fn framework_unavailable_error(interpreter: &str) -> String {
    format!(
        "Could not run the detection framework with '{}'\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Python 3 is not installed\n\
        • Ultralytics is not installed in this environment\n\
        • Wrong interpreter configured\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Install the framework:\n\
           \x1b[36m{} -m pip install ultralytics\x1b[0m\n\n\
        2. Point yolokit at another interpreter:\n\
           \x1b[36mexport YOLOKIT_PYTHON=/path/to/venv/bin/python\x1b[0m\n\n\
        3. Or set it in the config file:\n\
           \x1b[36m[python]\x1b[0m\n\
           \x1b[36minterpreter = \"/path/to/venv/bin/python\"\x1b[0m",
        interpreter, interpreter
    )
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to parse config file\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.yolokit/config.toml\x1b[0m\n\n\
        2. Move it aside to fall back to defaults:\n\
           \x1b[36mmv ~/.yolokit/config.toml ~/.yolokit/config.toml.backup\x1b[0m\n\n\
        3. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Numbers written as strings (imgsz = \"640\")\n\
           • Unknown section names",
        error
    )
}
