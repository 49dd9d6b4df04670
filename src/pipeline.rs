// Export pipeline
//
// validate format -> probe device -> load checkpoint -> bind device -> export

use std::path::PathBuf;
use tracing::{debug, error, warn};

use crate::device::{detect_device, Capabilities, Device};
use crate::errors::{framework_unavailable_error, ExportError, FrameworkError};
use crate::export::{export_model, validate_export_format};
use crate::framework::DetectionFramework;
use crate::model::load_model;

/// One export invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub model_path: PathBuf,

    /// Unvalidated format name as given on the command line
    pub export_format: String,
}

/// Ask the framework for its accelerators and pick a device
///
/// A failed probe is not fatal: it is logged and the CPU is used.
pub async fn probe_device(framework: &dyn DetectionFramework) -> Device {
    debug!("Probing accelerators via {}", framework.name());
    let capabilities = match framework.capabilities().await {
        Ok(capabilities) => capabilities,
        Err(e) => {
            warn!("Accelerator probe failed, assuming none: {}", e);
            Capabilities::cpu_only()
        }
    };
    detect_device(&capabilities)
}

/// Run the full export pipeline, returning the artifact path
pub async fn run_export(
    framework: &dyn DetectionFramework,
    request: &ExportRequest,
) -> Result<PathBuf, ExportError> {
    let format = validate_export_format(&request.export_format)?;
    let device = probe_device(framework).await;
    let model = load_model(framework, &request.model_path).await?;
    let model = model.bind(device);
    export_model(framework, &model, format).await
}

/// Final log message for a failed run
///
/// Usage errors are reported as-is; framework failures get a generic prefix.
pub fn failure_message(err: &ExportError) -> String {
    match err {
        ExportError::ModelNotFound { .. }
        | ExportError::DatasetNotFound { .. }
        | ExportError::InvalidFormat { .. }
        | ExportError::InvalidParameter { .. } => err.to_string(),
        ExportError::Framework(inner) => format!("Failed to complete the operation: {}", inner),
    }
}

/// Install suggestions, when the framework could not be started at all
pub fn failure_hint(err: &ExportError) -> Option<String> {
    match err {
        ExportError::Framework(FrameworkError::Unavailable { interpreter, .. }) => {
            Some(framework_unavailable_error(interpreter))
        }
        _ => None,
    }
}

/// Log the final message for a failed run
pub fn report_failure(err: &ExportError) {
    error!("{}", failure_message(err));
    if let Some(hint) = failure_hint(err) {
        eprintln!("\n{}", hint);
    }
}
