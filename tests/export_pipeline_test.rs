// Integration tests for the export pipeline
//
// Drives validate -> probe -> load -> bind -> export against a recording fake
// framework, so no Python installation is needed.

use async_trait::async_trait;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

use yolokit::cli::ExportArgs;
use yolokit::device::{Capabilities, Device};
use yolokit::errors::{ExportError, FrameworkError};
use yolokit::export::ExportFormat;
use yolokit::framework::DetectionFramework;
use yolokit::model::{BoundModel, ModelInfo};
use yolokit::pipeline::{probe_device, run_export, ExportRequest};
use yolokit::training::{TrainConfig, TrainOutcome};

/// Fake framework that records every call it receives
#[derive(Default)]
struct RecordingFramework {
    capabilities: Option<Capabilities>,
    fail_load: bool,
    fail_export: bool,
    calls: Mutex<Vec<String>>,
}

impl RecordingFramework {
    fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities: Some(capabilities),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn failure(detail: &str) -> FrameworkError {
    FrameworkError::Failed {
        status: "exit status: 1".to_string(),
        detail: detail.to_string(),
    }
}

#[async_trait]
impl DetectionFramework for RecordingFramework {
    fn name(&self) -> &str {
        "recording"
    }

    async fn capabilities(&self) -> Result<Capabilities, FrameworkError> {
        self.record("capabilities".to_string());
        self.capabilities
            .ok_or_else(|| failure("ModuleNotFoundError: No module named 'torch'"))
    }

    async fn load(&self, path: &Path) -> Result<ModelInfo, FrameworkError> {
        self.record(format!("load:{}", path.display()));
        if self.fail_load {
            return Err(failure("RuntimeError: invalid checkpoint"));
        }
        Ok(ModelInfo {
            task: Some("detect".to_string()),
            num_classes: Some(3),
        })
    }

    async fn export(
        &self,
        model: &BoundModel,
        format: ExportFormat,
    ) -> Result<PathBuf, FrameworkError> {
        self.record(format!("export:{}:{}", format, model.device().framework_arg()));
        if self.fail_export {
            return Err(failure("ImportError: onnx is required"));
        }
        Ok(model.path().with_extension(format.as_str()))
    }

    async fn train(&self, _config: &TrainConfig) -> Result<TrainOutcome, FrameworkError> {
        self.record("train".to_string());
        Ok(TrainOutcome::default())
    }
}

fn checkpoint(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("best.pt");
    std::fs::write(&path, b"weights").unwrap();
    path
}

fn request(model_path: &Path, format: &str) -> ExportRequest {
    ExportRequest {
        model_path: model_path.to_path_buf(),
        export_format: format.to_string(),
    }
}

#[tokio::test]
async fn test_missing_model_fails_before_export() {
    let framework = RecordingFramework::with_capabilities(Capabilities::cpu_only());
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.pt");

    let err = run_export(&framework, &request(&missing, "onnx"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::ModelNotFound { ref path } if path == &missing));
    assert_eq!(err.exit_code(), 2);
    let calls = framework.calls();
    assert!(calls.iter().all(|c| !c.starts_with("load") && !c.starts_with("export")));
}

#[tokio::test]
async fn test_invalid_format_touches_nothing() {
    let framework = RecordingFramework::with_capabilities(Capabilities::cpu_only());
    let dir = TempDir::new().unwrap();
    let model = checkpoint(&dir);

    let err = run_export(&framework, &request(&model, "xml"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::InvalidFormat { ref value } if value == "xml"));
    assert!(err
        .to_string()
        .ends_with("Supported formats are: onnx, torchscript, coreml, tflite, tfjs"));
    assert!(framework.calls().is_empty());
}

#[tokio::test]
async fn test_default_format_runs_full_pipeline() {
    let framework = RecordingFramework::with_capabilities(Capabilities::cpu_only());
    let dir = TempDir::new().unwrap();
    let model = checkpoint(&dir);

    let args = ExportArgs::try_parse_from([
        OsStr::new("yolo-export"),
        OsStr::new("--model-path"),
        model.as_os_str(),
    ])
    .unwrap();
    let artifact = run_export(&framework, &args.into_request()).await.unwrap();

    assert_eq!(artifact, model.with_extension("onnx"));
    assert_eq!(
        framework.calls(),
        vec![
            "capabilities".to_string(),
            format!("load:{}", model.display()),
            "export:onnx:cpu".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_cuda_device_is_bound_for_export() {
    let framework = RecordingFramework::with_capabilities(Capabilities {
        cuda: true,
        mps: true,
        rocm: false,
    });
    let dir = TempDir::new().unwrap();
    let model = checkpoint(&dir);

    run_export(&framework, &request(&model, "torchscript"))
        .await
        .unwrap();

    assert_eq!(framework.calls().last().unwrap(), "export:torchscript:0");
}

#[tokio::test]
async fn test_failed_probe_falls_back_to_cpu() {
    let framework = RecordingFramework::default();
    assert_eq!(probe_device(&framework).await, Device::Cpu);

    let dir = TempDir::new().unwrap();
    let model = checkpoint(&dir);
    run_export(&framework, &request(&model, "tflite"))
        .await
        .unwrap();
    assert_eq!(framework.calls().last().unwrap(), "export:tflite:cpu");
}

#[tokio::test]
async fn test_load_error_propagates_unchanged() {
    let framework = RecordingFramework {
        capabilities: Some(Capabilities::cpu_only()),
        fail_load: true,
        ..Default::default()
    };
    let dir = TempDir::new().unwrap();
    let model = checkpoint(&dir);

    let err = run_export(&framework, &request(&model, "onnx"))
        .await
        .unwrap_err();

    match &err {
        ExportError::Framework(FrameworkError::Failed { detail, .. }) => {
            assert_eq!(detail, "RuntimeError: invalid checkpoint")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(framework.calls().iter().all(|c| !c.starts_with("export")));
}

#[tokio::test]
async fn test_export_error_propagates_unchanged() {
    let framework = RecordingFramework {
        capabilities: Some(Capabilities::cpu_only()),
        fail_export: true,
        ..Default::default()
    };
    let dir = TempDir::new().unwrap();
    let model = checkpoint(&dir);

    let err = run_export(&framework, &request(&model, "coreml"))
        .await
        .unwrap_err();

    assert!(!err.is_caller_correctable());
    assert_eq!(err.to_string(), "framework exited with exit status: 1: ImportError: onnx is required");
}
