// yolo-train - train a YOLO model with the fixed training configuration

use clap::Parser;
use std::process::ExitCode;

use yolokit::cli::TrainArgs;
use yolokit::config::load_config;
use yolokit::errors::config_parse_error;
use yolokit::framework::Ultralytics;
use yolokit::logging::init_logging;
use yolokit::pipeline::report_failure;
use yolokit::training::run_training;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _args = TrainArgs::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", config_parse_error(&format!("{:#}", e)));
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.logging.debug);

    let framework = Ultralytics::with_interpreter(config.python.interpreter);
    match run_training(&framework, &config.train).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
