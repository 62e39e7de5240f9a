use crate::config::{
    DEFAULT_ALWAYS_ON_TOP, DEFAULT_POPUP_HEIGHT, DEFAULT_POPUP_WIDTH, default_always_on_top,
    default_popup_height, default_popup_width,
};

use serde::{Deserialize, Serialize};

/// Popup window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Popup width in logical pixels.
    #[serde(default = "default_popup_width")]
    pub width: f64,

    /// Popup height in logical pixels.
    #[serde(default = "default_popup_height")]
    pub height: f64,

    /// Keep the popup above other windows.
    #[serde(default = "default_always_on_top")]
    pub always_on_top: bool,

    /// Close the popup when it loses focus.
    #[serde(default)]
    pub close_on_blur: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_POPUP_WIDTH,
            height: DEFAULT_POPUP_HEIGHT,
            always_on_top: DEFAULT_ALWAYS_ON_TOP,
            close_on_blur: false,
        }
    }
}
