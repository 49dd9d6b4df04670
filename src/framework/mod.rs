// Detection framework seam
//
// Everything the crate needs from the external training/export library goes
// through `DetectionFramework`. `Ultralytics` is the real implementation.

mod bridge;
mod ultralytics;

pub use bridge::PythonBridge;
pub use ultralytics::Ultralytics;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::device::Capabilities;
use crate::errors::FrameworkError;
use crate::export::ExportFormat;
use crate::model::{BoundModel, ModelInfo};
use crate::training::{TrainConfig, TrainOutcome};

/// Operations consumed from the model-training library
#[async_trait]
pub trait DetectionFramework: Send + Sync {
    /// Name for logging
    fn name(&self) -> &str;

    /// Query which accelerators the runtime can use
    async fn capabilities(&self) -> Result<Capabilities, FrameworkError>;

    /// Parse a checkpoint and report its metadata
    async fn load(&self, path: &Path) -> Result<ModelInfo, FrameworkError>;

    /// Export a bound model, returning the artifact path
    async fn export(
        &self,
        model: &BoundModel,
        format: ExportFormat,
    ) -> Result<PathBuf, FrameworkError>;

    /// Train from a pretrained checkpoint
    async fn train(&self, config: &TrainConfig) -> Result<TrainOutcome, FrameworkError>;
}
