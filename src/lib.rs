// yolokit - train and export YOLO detection models
// Library exports

pub mod cli;
pub mod config;
pub mod device;
pub mod errors;
pub mod export;
pub mod framework;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod training;
