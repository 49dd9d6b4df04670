// Integration tests for config file loading

use std::path::PathBuf;
use tempfile::TempDir;

use yolokit::config::{load_config_from, Config};

#[test]
fn test_config_file_overrides_train_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[python]\ninterpreter = \"/opt/yolo/bin/python\"\n\n[train]\nepochs = 100\ndata = \"yaml/parts.yaml\"\n",
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.python.interpreter, "/opt/yolo/bin/python");
    assert_eq!(config.train.epochs, 100);
    assert_eq!(config.train.data, PathBuf::from("yaml/parts.yaml"));
    assert_eq!(config.train.batch, 8);
    assert!(!config.logging.debug);
}

#[test]
fn test_empty_file_is_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(load_config_from(&path).unwrap(), Config::default());
}

#[test]
fn test_malformed_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[train]\nimgsz = \"640\"\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}
