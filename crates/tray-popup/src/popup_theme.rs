use std::panic::Location;

use error_location::ErrorLocation;
use tao::window::Theme;
use tray_popup_core::{TrayError, TrayResult};

/// Popup themes understood by the window factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTheme {
    /// Dark window chrome.
    Dark,
    /// Light window chrome.
    Light,
    /// Follow the OS setting.
    System,
}

impl PopupTheme {
    /// Resolve a configured theme name (case-insensitive).
    #[track_caller]
    pub fn parse(name: &str) -> TrayResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(PopupTheme::Dark),
            "light" => Ok(PopupTheme::Light),
            "system" => Ok(PopupTheme::System),
            _ => Err(TrayError::Construction {
                reason: format!("Unknown popup theme: {:?}", name),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Theme to hand to the window builder. `None` follows the OS.
    pub fn window_theme(self) -> Option<Theme> {
        match self {
            PopupTheme::Dark => Some(Theme::Dark),
            PopupTheme::Light => Some(Theme::Light),
            PopupTheme::System => None,
        }
    }
}
