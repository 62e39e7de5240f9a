use crate::StringTable;

use std::panic::Location;

use error_location::ErrorLocation;
use tray_popup_core::{IconAssetProvider, IconImage, TrayError, TrayResult};

/// Tray icon PNG, embedded so it works regardless of install location.
const TRAY_ICON_PNG: &[u8] = include_bytes!("../resources/icons/tray.png");

/// Icon and strings compiled into the binary.
#[derive(Debug, Clone)]
pub struct EmbeddedAssets {
    strings: StringTable,
}

impl EmbeddedAssets {
    /// Wrap a loaded string table.
    pub fn new(strings: StringTable) -> Self {
        Self { strings }
    }
}

impl IconAssetProvider for EmbeddedAssets {
    #[track_caller]
    fn icon_image(&self) -> TrayResult<IconImage> {
        let img = image::load_from_memory(TRAY_ICON_PNG).map_err(|e| TrayError::IconAsset {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Ok(IconImage {
            rgba: rgba.into_raw(),
            width,
            height,
        })
    }

    fn localized_string(&self, key: &str) -> String {
        self.strings.get(key)
    }
}
