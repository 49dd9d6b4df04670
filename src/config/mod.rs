// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{
    apply_env_overrides, config_path, load_config, load_config_from, load_config_or_default,
};
pub use settings::{Config, LoggingConfig, PythonConfig};
