use error_location::ErrorLocation;
use thiserror::Error;

/// Tray controller errors with source location tracking.
#[derive(Error, Debug)]
pub enum TrayError {
    /// Required option missing or invalid when creating the tray.
    #[error("Configuration error: {reason} {location}")]
    Configuration {
        /// Description of the invalid option.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The attached window factory failed to build the popup.
    #[error("Popup construction failed: {reason} {location}")]
    Construction {
        /// Description of the construction failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Icon image could not be produced by the asset provider.
    #[error("Icon asset error: {reason} {location}")]
    IconAsset {
        /// Description of the asset failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Host tray API rejected an operation.
    #[error("Tray host error: {reason} {location}")]
    Host {
        /// Description of the host failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A user supplied click hook panicked.
    #[error("Click hook '{hook}' panicked: {message} {location}")]
    HookPanicked {
        /// Which hook panicked.
        hook: &'static str,
        /// Panic payload, when it was a string.
        message: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`TrayError`].
pub type Result<T> = std::result::Result<T, TrayError>;
