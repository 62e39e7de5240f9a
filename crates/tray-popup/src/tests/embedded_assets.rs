use crate::{EmbeddedAssets, StringTable};

use tray_popup_core::{APP_NAME_KEY, IconAssetProvider};

/// WHAT: The embedded tray icon decodes to RGBA pixels
/// WHY: A broken asset would leave the status bar empty
#[test]
#[allow(clippy::unwrap_used)]
fn given_embedded_icon_when_decoding_then_rgba_matches_dimensions() {
    // Given: Assets with English strings
    let assets = EmbeddedAssets::new(StringTable::for_locale("en").unwrap());

    // When: Decoding the icon
    let image = assets.icon_image().unwrap();

    // Then: Square icon with four bytes per pixel
    assert_eq!(image.width, 32);
    assert_eq!(image.height, 32);
    assert_eq!(image.rgba.len(), (image.width * image.height * 4) as usize);
}

/// WHAT: The tooltip string comes from the string table
/// WHY: The tray tooltip shows the localized application name
#[test]
#[allow(clippy::unwrap_used)]
fn given_assets_when_looking_up_app_name_then_localized() {
    let assets = EmbeddedAssets::new(StringTable::for_locale("en").unwrap());

    assert_eq!(assets.localized_string(APP_NAME_KEY), "Tray Popup");
}
