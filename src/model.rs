// Model handles
//
// A checkpoint goes through two states: loaded (parsed by the framework) and
// bound (attached to a device). Binding consumes the loaded handle, so a model
// is bound exactly once.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::device::Device;
use crate::errors::ExportError;
use crate::framework::DetectionFramework;

/// Architecture metadata reported by the framework when it parses a checkpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelInfo {
    /// Task head (detect, segment, classify, pose, obb)
    #[serde(default)]
    pub task: Option<String>,

    /// Number of classes the head predicts
    #[serde(default)]
    pub num_classes: Option<usize>,
}

/// A checkpoint the framework has accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModel {
    path: PathBuf,
    info: ModelInfo,
}

impl LoadedModel {
    pub fn new(path: PathBuf, info: ModelInfo) -> Self {
        Self { path, info }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    /// Attach the model to a compute device
    pub fn bind(self, device: Device) -> BoundModel {
        info!("Binding model to {}", device);
        BoundModel {
            model: self,
            device,
        }
    }
}

/// A loaded model with its device fixed for the rest of the invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundModel {
    model: LoadedModel,
    device: Device,
}

impl BoundModel {
    pub fn path(&self) -> &Path {
        self.model.path()
    }

    pub fn info(&self) -> &ModelInfo {
        self.model.info()
    }

    pub fn device(&self) -> Device {
        self.device
    }
}

/// Load a checkpoint through the framework
///
/// Fails with `ModelNotFound` before the framework is touched if `path` is missing.
pub async fn load_model(
    framework: &dyn DetectionFramework,
    path: &Path,
) -> Result<LoadedModel, ExportError> {
    if !path.exists() {
        return Err(ExportError::ModelNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading model from {}", path.display());

    match framework.load(path).await {
        Ok(info) => {
            info!("Model loaded successfully");
            if let (Some(task), Some(classes)) = (&info.task, info.num_classes) {
                info!("Model task: {}, classes: {}", task, classes);
            }
            Ok(LoadedModel::new(path.to_path_buf(), info))
        }
        Err(e) => {
            error!("Error loading model: {}", e);
            Err(e.into())
        }
    }
}
