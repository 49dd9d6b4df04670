// yolo-export - load a trained checkpoint and export it
// Main entry point

use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use yolokit::cli::ExportArgs;
use yolokit::config::load_config;
use yolokit::errors::config_parse_error;
use yolokit::framework::Ultralytics;
use yolokit::logging::init_logging;
use yolokit::pipeline::{report_failure, run_export};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = ExportArgs::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", config_parse_error(&format!("{:#}", e)));
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.logging.debug);

    let framework = Ultralytics::with_interpreter(config.python.interpreter);
    match run_export(&framework, &args.into_request()).await {
        Ok(artifact) => {
            info!("Done: {}", artifact.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
