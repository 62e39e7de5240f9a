use crate::TrayResult;

/// String table key for the tooltip shown on the tray icon.
pub const APP_NAME_KEY: &str = "server.app-name";

/// Decoded RGBA icon pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Read-only source of the tray icon image and localized strings.
pub trait IconAssetProvider {
    /// The fixed image used for the tray icon.
    fn icon_image(&self) -> TrayResult<IconImage>;

    /// Look up `key` in the user's locale.
    fn localized_string(&self, key: &str) -> String;
}
