//! Tray Popup: a status-bar icon that toggles an attached popup window.

mod app;
mod blur_guard;
mod config;
mod embedded_assets;
mod error;
mod popup_factory;
mod popup_theme;
mod popup_windows;
mod string_table;
#[cfg(test)]
mod tests;
mod tray_host;
mod ui_command;

pub(crate) use {
    app::App,
    blur_guard::BlurGuard,
    embedded_assets::EmbeddedAssets,
    error::{AppError, Result as AppResult},
    popup_factory::{PopupFactory, PopupHandle},
    popup_theme::PopupTheme,
    popup_windows::PopupWindows,
    string_table::{QUIT_KEY, StringTable},
    tray_host::{NativeTrayHost, StatusIcon},
    ui_command::{PopupRequest, UiCommand},
};

use crate::config::Config;

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tokio::sync::watch;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use tray_popup_core::{APP_NAME_KEY, ClickDecision, TrayController, TrayOptions};

const DEFAULT_LOG_FILTER: &str = "tray_popup=debug,tray_popup_core=debug";

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let strings = match StringTable::load(config.tray.locale.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load strings: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<UiCommand>::with_user_event().build();
    let ui_proxy = event_loop.create_proxy();

    // Popups and the tray icon live on the main thread - both are !Send.
    let blur_guard = BlurGuard::new();
    let mut popups = PopupWindows::new(
        config.popup.clone(),
        strings.get(APP_NAME_KEY),
        blur_guard.clone(),
    );

    // Persists across event loop iterations: dropping it removes the icon.
    let mut status_icon: Option<StatusIcon> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                UiCommand::OpenPopup(request) => popups.open(target, request),
                UiCommand::ClosePopup(window_id) => popups.close(window_id),
                UiCommand::Shutdown => {
                    popups.close_all();
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::WindowEvent {
                window_id, event, ..
            } => {
                popups.handle_window_event(window_id, &event);
            }
            Event::NewEvents(StartCause::Init) => {
                // The tray icon is created once the event loop is running.
                let tray = create_tray(&config, &strings, &ui_proxy, &blur_guard);
                let (icon, controller) = match tray {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to create tray: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let quit_menu_id = icon.quit_item_id().clone();
                status_icon = Some(icon);

                let ui_proxy = ui_proxy.clone();
                let (shutdown_tx, _shutdown_rx) = watch::channel(false);

                // Spawn tokio runtime on separate thread.
                // The tray icon and popup windows stay on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App {
                            controller,
                            ui_proxy,
                            quit_menu_id,
                            shutdown_tx,
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            _ => {}
        }

        // Keep the tray icon alive in the closure for the app's lifetime.
        let _ = &status_icon;
    });
}

/// Register the tray icon and build its controller.
fn create_tray(
    config: &Config,
    strings: &StringTable,
    ui_proxy: &EventLoopProxy<UiCommand>,
    blur_guard: &BlurGuard,
) -> AppResult<(StatusIcon, TrayController<PopupFactory>)> {
    let assets = EmbeddedAssets::new(strings.clone());
    let mut host = NativeTrayHost::new(strings.get(QUIT_KEY), blur_guard.clone());
    let factory = PopupFactory::new(ui_proxy.clone());

    let options = TrayOptions::new()
        .maybe_theme(config.tray.theme.clone())
        .on_tray_icon_click(|click| {
            debug!(bounds = ?click.bounds, point = ?click.point, "Tray icon clicked");
            ClickDecision::Proceed
        })
        .after_tray_icon_click(|popup: Option<&PopupHandle>| match popup {
            Some(popup) => info!(window_id = ?popup.window_id(), "Popup shown"),
            None => info!("Popup hidden"),
        })
        .on_error(|e| error!(error = %e, "Tray popup error"));

    let pair = TrayController::create(options, &assets, &mut host, factory)?;

    Ok(pair)
}
