//! Tray Popup Core Library
//!
//! Toggle controller for a single tray icon with an attached popup window.
//! The host toolkit, icon assets and the popup window itself are supplied by
//! the caller through the traits exported here.
//!
//! # Example
//!
//! ```no_run
//! use tray_popup_core::{
//!     AttachedWindowFactory, ClickDecision, IconAssetProvider, TrayController, TrayHost,
//!     TrayOptions, TrayResult,
//! };
//! use tokio::sync::watch;
//!
//! fn start<H, F, A>(
//!     host: &mut H,
//!     factory: F,
//!     assets: &A,
//! ) -> TrayResult<(H::Icon, watch::Sender<bool>)>
//! where
//!     H: TrayHost,
//!     F: AttachedWindowFactory,
//!     A: IconAssetProvider,
//! {
//!     let options = TrayOptions::new()
//!         .theme("dark")
//!         .on_tray_icon_click(|_event| ClickDecision::Proceed);
//!
//!     let (icon, controller) = TrayController::create(options, assets, host, factory)?;
//!
//!     // Must be called from within a tokio runtime.
//!     let (shutdown_tx, shutdown_rx) = watch::channel(false);
//!     tokio::spawn(controller.run(shutdown_rx));
//!
//!     Ok((icon, shutdown_tx))
//! }
//! ```

mod assets;
mod click_event;
mod controller;
mod error;
mod geometry;
mod host;
mod options;
mod window;

pub use {
    assets::{APP_NAME_KEY, IconAssetProvider, IconImage},
    click_event::{ClickDecision, ClickEvent},
    controller::{PopupStatus, TrayController},
    error::{Result as TrayResult, TrayError},
    geometry::{Point, Rect, Size, anchor_popup},
    host::{ClickSink, TrayHost, TrayIconHandle},
    options::{AfterClickHook, BeforeClickHook, ErrorHook, TrayOptions},
    window::{AttachedWindowFactory, OnClosed, PopupId, PopupWindow, WindowConfig},
};

#[cfg(test)]
mod tests;
