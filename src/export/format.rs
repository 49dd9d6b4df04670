// Export format whitelist

use std::fmt;
use std::str::FromStr;

use crate::errors::ExportError;

/// Formats the framework is asked to export, in display order
pub const SUPPORTED_FORMATS: [&str; 5] = ["onnx", "torchscript", "coreml", "tflite", "tfjs"];

/// Target interchange format for a trained model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    #[default]
    Onnx,
    TorchScript,
    CoreMl,
    TfLite,
    TfJs,
}

impl ExportFormat {
    /// Every supported format, in the same order as `SUPPORTED_FORMATS`
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Onnx,
        ExportFormat::TorchScript,
        ExportFormat::CoreMl,
        ExportFormat::TfLite,
        ExportFormat::TfJs,
    ];

    /// Name the framework expects for `format=`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Onnx => "onnx",
            ExportFormat::TorchScript => "torchscript",
            ExportFormat::CoreMl => "coreml",
            ExportFormat::TfLite => "tflite",
            ExportFormat::TfJs => "tfjs",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ExportError::InvalidFormat {
                value: s.to_string(),
            })
    }
}

/// Check a user-supplied format name against the whitelist
///
/// Matching is exact: `ONNX` is rejected just like `xml`.
pub fn validate_export_format(candidate: &str) -> Result<ExportFormat, ExportError> {
    candidate.parse()
}
