#[allow(clippy::module_inception)]
mod config;
mod popup_config;
mod tray_config;

pub(crate) use {config::Config, popup_config::PopupConfig, tray_config::TrayConfig};

pub(crate) const DEFAULT_THEME: &str = "system";
pub(crate) const DEFAULT_POPUP_WIDTH: f64 = 320.0;
pub(crate) const DEFAULT_POPUP_HEIGHT: f64 = 420.0;
pub(crate) const DEFAULT_ALWAYS_ON_TOP: bool = true;

pub(crate) fn default_popup_width() -> f64 {
    DEFAULT_POPUP_WIDTH
}

pub(crate) fn default_popup_height() -> f64 {
    DEFAULT_POPUP_HEIGHT
}

pub(crate) fn default_always_on_top() -> bool {
    DEFAULT_ALWAYS_ON_TOP
}
