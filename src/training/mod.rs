// Training module - fixed-configuration training runs

mod config;

pub use config::{TrainConfig, TrainOutcome};

use tracing::{error, info};

use crate::errors::ExportError;
use crate::framework::DetectionFramework;

/// Train a model with the given configuration
///
/// The dataset descriptor must exist and the numeric parameters must be
/// positive before the framework is started.
pub async fn run_training(
    framework: &dyn DetectionFramework,
    config: &TrainConfig,
) -> Result<TrainOutcome, ExportError> {
    config.validate()?;

    info!(
        "Starting training: model={} data={} imgsz={} batch={} epochs={} plots={}",
        config.model,
        config.data.display(),
        config.imgsz,
        config.batch,
        config.epochs,
        config.plots
    );

    match framework.train(config).await {
        Ok(outcome) => {
            info!("Training completed successfully");
            if let Some(dir) = &outcome.save_dir {
                info!("Training results saved to: {}", dir.display());
            }
            Ok(outcome)
        }
        Err(e) => {
            error!("Error training model: {}", e);
            Err(e.into())
        }
    }
}
