// Model export
//
// Format validation and the export step proper. The artifact location is chosen
// by the framework and reported back.

mod format;

pub use format::{validate_export_format, ExportFormat, SUPPORTED_FORMATS};

use std::path::PathBuf;
use tracing::{error, info};

use crate::errors::ExportError;
use crate::framework::DetectionFramework;
use crate::model::BoundModel;

/// Export a device-bound model, returning the artifact path reported by the framework
pub async fn export_model(
    framework: &dyn DetectionFramework,
    model: &BoundModel,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    info!("Exporting model to {} format", format);

    match framework.export(model, format).await {
        Ok(artifact) => {
            info!("Model exported successfully");
            info!("Export artifact: {}", artifact.display());
            Ok(artifact)
        }
        Err(e) => {
            error!("Error exporting model: {}", e);
            Err(e.into())
        }
    }
}
