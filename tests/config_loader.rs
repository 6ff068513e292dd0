use navlist::config::{Config, ConfigError, NavigationMode, DEFAULT_NAMES};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.names, DEFAULT_NAMES.map(String::from).to_vec());
    assert_eq!(config.navigation.mode, NavigationMode::Stack);
    assert_eq!(config.navigation.split_min_width, 60);
}

#[test]
fn empty_file_gives_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn full_file_overrides_everything() {
    let (_dir, path) = write_config(
        r#"
names = ["Ada", "Grace"]

[navigation]
mode = "split"
split_min_width = 80
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.names, vec!["Ada".to_string(), "Grace".to_string()]);
    assert_eq!(config.navigation.mode, NavigationMode::Split);
    assert_eq!(config.navigation.split_min_width, 80);
}

#[test]
fn partial_navigation_table_fills_defaults() {
    let (_dir, path) = write_config("[navigation]\nmode = \"split\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.navigation.mode, NavigationMode::Split);
    assert_eq!(config.navigation.split_min_width, 60);
    assert_eq!(config.names.len(), DEFAULT_NAMES.len());
}

#[test]
fn unknown_mode_is_parse_error() {
    let (_dir, path) = write_config("[navigation]\nmode = \"tabs\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn empty_names_fail_validation() {
    let (_dir, path) = write_config("names = []\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_split_width_fails_validation() {
    let (_dir, path) = write_config("[navigation]\nsplit_min_width = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn directory_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn default_path_is_under_app_dir() {
    assert!(Config::config_path().ends_with("navlist/config.toml"));
}
