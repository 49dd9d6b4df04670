// Ultralytics YOLO over the Python bridge

use async_trait::async_trait;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::bridge::PythonBridge;
use super::DetectionFramework;
use crate::device::Capabilities;
use crate::errors::FrameworkError;
use crate::export::ExportFormat;
use crate::model::{BoundModel, ModelInfo};
use crate::training::{TrainConfig, TrainOutcome};

const CAPABILITIES_PROGRAM: &str = r#"
import json
import torch
mps = getattr(torch.backends, "mps", None)
print("@@yolokit " + json.dumps({
    "cuda": bool(torch.cuda.is_available()),
    "mps": bool(mps is not None and mps.is_available()),
    "rocm": getattr(torch.version, "hip", None) is not None,
}))
"#;

const LOAD_PROGRAM: &str = r#"
import json
import sys
from ultralytics import YOLO
model = YOLO(sys.argv[1])
try:
    num_classes = len(model.names)
except Exception:
    num_classes = None
print("@@yolokit " + json.dumps({"task": model.task, "num_classes": num_classes}))
"#;

const EXPORT_PROGRAM: &str = r#"
import json
import sys
from ultralytics import YOLO
model = YOLO(sys.argv[1])
artifact = model.export(format=sys.argv[2], device=sys.argv[3])
print("@@yolokit " + json.dumps({"artifact": str(artifact)}))
"#;

const TRAIN_PROGRAM: &str = r#"
import json
import sys
from ultralytics import YOLO
model = YOLO(sys.argv[1])
model.train(
    data=sys.argv[2],
    imgsz=int(sys.argv[3]),
    batch=int(sys.argv[4]),
    epochs=int(sys.argv[5]),
    plots=sys.argv[6] == "true",
)
save_dir = getattr(getattr(model, "trainer", None), "save_dir", None)
print("@@yolokit " + json.dumps({"save_dir": str(save_dir) if save_dir else None}))
"#;

#[derive(Debug, Deserialize)]
struct ExportResult {
    artifact: PathBuf,
}

/// Ultralytics YOLO reached through a Python interpreter
#[derive(Debug, Clone)]
pub struct Ultralytics {
    bridge: PythonBridge,
}

impl Ultralytics {
    pub fn new(bridge: PythonBridge) -> Self {
        Self { bridge }
    }

    /// Use the given interpreter (e.g. a virtualenv's `python`)
    pub fn with_interpreter(interpreter: impl Into<String>) -> Self {
        Self::new(PythonBridge::new(interpreter))
    }

    pub fn bridge(&self) -> &PythonBridge {
        &self.bridge
    }
}

#[async_trait]
impl DetectionFramework for Ultralytics {
    fn name(&self) -> &str {
        "ultralytics"
    }

    async fn capabilities(&self) -> Result<Capabilities, FrameworkError> {
        debug!("Running capability query with {}", self.bridge.interpreter());
        self.bridge.run(CAPABILITIES_PROGRAM, &[]).await
    }

    async fn load(&self, path: &Path) -> Result<ModelInfo, FrameworkError> {
        self.bridge.run(LOAD_PROGRAM, &[path.as_os_str()]).await
    }

    async fn export(
        &self,
        model: &BoundModel,
        format: ExportFormat,
    ) -> Result<PathBuf, FrameworkError> {
        let args = [
            model.path().as_os_str(),
            OsStr::new(format.as_str()),
            OsStr::new(model.device().framework_arg()),
        ];
        let result: ExportResult = self.bridge.run(EXPORT_PROGRAM, &args).await?;
        Ok(result.artifact)
    }

    async fn train(&self, config: &TrainConfig) -> Result<TrainOutcome, FrameworkError> {
        let imgsz = config.imgsz.to_string();
        let batch = config.batch.to_string();
        let epochs = config.epochs.to_string();
        let plots = if config.plots { "true" } else { "false" };
        let args = [
            OsStr::new(&config.model),
            config.data.as_os_str(),
            OsStr::new(&imgsz),
            OsStr::new(&batch),
            OsStr::new(&epochs),
            OsStr::new(plots),
        ];
        self.bridge.run_streaming(TRAIN_PROGRAM, &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs_report_through_marker() {
        for program in [CAPABILITIES_PROGRAM, LOAD_PROGRAM, EXPORT_PROGRAM, TRAIN_PROGRAM] {
            assert!(program.contains("\"@@yolokit \""));
        }
    }

    #[test]
    fn test_with_interpreter() {
        let framework = Ultralytics::with_interpreter("/opt/venv/bin/python");
        assert_eq!(framework.bridge().interpreter(), "/opt/venv/bin/python");
        assert_eq!(framework.name(), "ultralytics");
    }

    #[test]
    fn test_export_result_decodes() {
        let result: ExportResult =
            serde_json::from_str(r#"{"artifact": "runs/best.onnx"}"#).unwrap();
        assert_eq!(result.artifact, PathBuf::from("runs/best.onnx"));
    }
}
