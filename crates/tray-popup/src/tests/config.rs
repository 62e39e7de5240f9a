use crate::{
    AppError,
    config::{Config, DEFAULT_POPUP_HEIGHT, DEFAULT_POPUP_WIDTH, PopupConfig, TrayConfig},
};

use std::fs;

/// WHAT: A full config file parses every field
/// WHY: Users edit the TOML file by hand
#[test]
#[allow(clippy::unwrap_used)]
fn given_full_config_when_parsing_then_all_fields_read() {
    // Given: A complete config file
    let contents = r#"
        [tray]
        theme = "dark"
        locale = "de_DE.UTF-8"

        [popup]
        width = 280.0
        height = 360.0
        always_on_top = false
        close_on_blur = true
    "#;

    // When: Parsing
    let config = Config::parse(contents).unwrap();

    // Then: Every field is read
    assert_eq!(config.tray.theme.as_deref(), Some("dark"));
    assert_eq!(config.tray.locale.as_deref(), Some("de_DE.UTF-8"));
    assert_eq!(config.popup.width, 280.0);
    assert_eq!(config.popup.height, 360.0);
    assert!(!config.popup.always_on_top);
    assert!(config.popup.close_on_blur);
}

/// WHAT: Missing sections and fields fall back to defaults
/// WHY: Older or minimal config files must keep working
#[test]
#[allow(clippy::unwrap_used)]
fn given_minimal_config_when_parsing_then_defaults_applied() {
    // Given: Only a theme
    let contents = "[tray]\ntheme = \"light\"\n";

    // When: Parsing
    let config = Config::parse(contents).unwrap();

    // Then: Popup settings use defaults
    assert_eq!(config.tray.theme.as_deref(), Some("light"));
    assert!(config.tray.locale.is_none());
    assert_eq!(config.popup.width, DEFAULT_POPUP_WIDTH);
    assert_eq!(config.popup.height, DEFAULT_POPUP_HEIGHT);
    assert!(config.popup.always_on_top);
    assert!(!config.popup.close_on_blur);
}

/// WHAT: A config without a theme still parses
/// WHY: The tray controller owns theme validation and reports it at start-up
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_without_theme_when_parsing_then_theme_is_none() {
    // Given: An empty file
    // When: Parsing
    let config = Config::parse("").unwrap();

    // Then: No theme
    assert!(config.tray.theme.is_none());
}

/// WHAT: Malformed TOML is a configuration error
/// WHY: Parse failures must be reported, not silently replaced with defaults
#[test]
fn given_malformed_config_when_parsing_then_config_error() {
    // Given: Broken TOML
    let contents = "[tray\ntheme = ";

    // When: Parsing
    let result = Config::parse(contents);

    // Then: ConfigError
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Saving writes a readable file and leaves no staging file behind
/// WHY: The default config written on first start must load on the next one
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_when_writing_then_file_reloads_without_staging_file() {
    // Given: A config and a scratch directory
    let dir = std::env::temp_dir().join(format!("tray-popup-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let config = Config {
        tray: TrayConfig {
            theme: Some("dark".to_string()),
            locale: Some("fr".to_string()),
        },
        popup: PopupConfig::default(),
    };

    // When: Writing it
    config.write_to(&path).unwrap();

    // Then: It parses back and the staging file is gone
    let reloaded = Config::parse(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded.tray.theme.as_deref(), Some("dark"));
    assert_eq!(reloaded.tray.locale.as_deref(), Some("fr"));
    assert!(!path.with_extension("toml.tmp").exists());

    fs::remove_dir_all(&dir).unwrap();
}
