//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use crossline::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CRL_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("CRL_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("CRL_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Crossline");
    assert_eq!(config.camera.start_position, [0.0, 0.0, 3.0]);
}

#[test]
#[serial]
fn test_env_numeric_override() {
    std::env::set_var("CRL_INPUT__MOVE_SPEED", "2.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.input.move_speed, 2.5);
    std::env::remove_var("CRL_INPUT__MOVE_SPEED");
}
