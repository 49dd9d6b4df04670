// Training configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::ExportError;

/// Parameters for one training run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    /// Pretrained checkpoint name or path (default: yolov8s.pt)
    pub model: String,

    /// Dataset descriptor YAML (default: ./yaml/mytrainingset.yaml)
    pub data: PathBuf,

    /// Training image size (default: 640)
    pub imgsz: u32,

    /// Batch size (default: 8)
    pub batch: u32,

    /// Epoch count (default: 50)
    pub epochs: u32,

    /// Whether the framework renders training plots (default: false)
    pub plots: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            model: "yolov8s.pt".to_string(),
            data: PathBuf::from("./yaml/mytrainingset.yaml"),
            imgsz: 640,
            batch: 8,
            epochs: 50,
            plots: false,
        }
    }
}

impl TrainConfig {
    /// Check the run can start: dataset present, numeric parameters positive
    pub fn validate(&self) -> Result<(), ExportError> {
        for (name, value) in [
            ("imgsz", self.imgsz),
            ("batch", self.batch),
            ("epochs", self.epochs),
        ] {
            if value == 0 {
                return Err(ExportError::InvalidParameter {
                    name,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        if !self.data.exists() {
            return Err(ExportError::DatasetNotFound {
                path: self.data.clone(),
            });
        }

        Ok(())
    }
}

/// What the framework reported after training
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrainOutcome {
    /// Run directory holding weights and metrics
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
}
