// Command-line arguments for the yolo-export and yolo-train binaries

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::ExportRequest;

/// Load and export YOLO model
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "yolo-export", version)]
#[command(about = "Load and export YOLO model")]
pub struct ExportArgs {
    /// Path to the YOLO model file (e.g., 'best.pt')
    #[arg(long = "model-path")]
    pub model_path: PathBuf,

    /// Export format (default: 'onnx'). Supported formats: onnx, torchscript, coreml, tflite, tfjs
    #[arg(long = "export-format", default_value = "onnx")]
    pub export_format: String,
}

impl ExportArgs {
    pub fn into_request(self) -> ExportRequest {
        ExportRequest {
            model_path: self.model_path,
            export_format: self.export_format,
        }
    }
}

/// Train a YOLO model with the configured dataset and hyperparameters
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "yolo-train", version)]
#[command(about = "Train a YOLO model from a dataset descriptor")]
pub struct TrainArgs {}
