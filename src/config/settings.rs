// Configuration structs

use serde::Deserialize;

use crate::training::TrainConfig;

/// Contents of ~/.yolokit/config.toml; every section is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Interpreter used to reach the framework
    pub python: PythonConfig,

    /// Overrides for the fixed training run
    pub train: TrainConfig,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PythonConfig {
    /// Python executable with ultralytics installed (default: python3)
    pub interpreter: String,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Show debug lines, including forwarded framework output
    pub debug: bool,
}
