use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use cheatsheet_rs::config::{ServeConfig, SheetConfig};
use cheatsheet_rs::error::SheetError;
use cheatsheet_rs::template::Theme;

fn scratch_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "cheatsheet-rs-{name}-{}-{nanos}",
        std::process::id()
    ))
}

#[test]
fn default_config_round_trips_through_json() {
    let config = SheetConfig::default();
    let json = config.to_json_pretty().expect("serialize");
    let back = SheetConfig::from_json_str(&json).expect("parse");

    assert_eq!(back, config);
    assert_eq!(back.server, ServeConfig::new("127.0.0.1", 5006));
    assert_eq!(back.thumbnail.width, Some(50));
    assert_eq!(back.template.expected_columns, Some(3));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = SheetConfig::from_json_str(
        r#"{ "server": { "port": 8080 }, "template": { "theme": "light" } }"#,
    )
    .expect("partial config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.template.theme, Theme::Light);
    assert_eq!(config.template.title, "Cheat Sheet (Bokeh Backend)");
    assert_eq!(config.thumbnail, SheetConfig::default().thumbnail);
}

#[test]
fn malformed_or_invalid_config_is_rejected() {
    assert!(matches!(
        SheetConfig::from_json_str("invalid json"),
        Err(SheetError::InvalidData(_))
    ));
    assert!(matches!(
        SheetConfig::from_json_str(r#"{ "template": { "accent": "nope" } }"#),
        Err(SheetError::InvalidData(_))
    ));
    assert!(matches!(
        SheetConfig::from_json_str(r#"{ "template": { "title": "  " } }"#),
        Err(SheetError::InvalidData(_))
    ));
}

#[test]
fn save_creates_directories_and_load_recovers_config() {
    let dir = scratch_dir("save");
    let path = dir.join("nested").join("config.json");
    let mut config = SheetConfig::default();
    config.server.port = 9000;
    config.template.title = "Custom".to_owned();

    config.save(&path).expect("save config");
    let loaded = SheetConfig::load_from_file(&path).expect("load config");
    assert_eq!(loaded, config);

    config.server.port = 9001;
    config.save(&path).expect("overwrite config");
    let reloaded = SheetConfig::load_from_file(&path).expect("reload config");
    assert_eq!(reloaded.server.port, 9001);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn loading_missing_file_is_io_error() {
    let path = scratch_dir("missing").join("absent.json");
    assert!(matches!(
        SheetConfig::load_from_file(&path),
        Err(SheetError::Io(_))
    ));
}
