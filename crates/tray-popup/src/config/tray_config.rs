use serde::{Deserialize, Serialize};

/// Tray icon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrayConfig {
    /// Popup theme name (`dark`, `light` or `system`). Required at start-up.
    #[serde(default)]
    pub theme: Option<String>,

    /// Locale override for tray strings (None = detect from environment).
    #[serde(default)]
    pub locale: Option<String>,
}
