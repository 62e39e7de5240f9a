use crate::{AppError, AppResult, PopupFactory, UiCommand};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument};
use tray_icon::menu::{MenuEvent, MenuId};
use tray_popup_core::TrayController;

/// Async side of the application.
///
/// Runs on the tokio runtime thread. The tray controller task serves popup
/// toggles; this loop watches the tray menu and coordinates shutdown with
/// the main thread via `ui_proxy`.
pub struct App {
    pub(crate) controller: TrayController<PopupFactory>,
    pub(crate) ui_proxy: EventLoopProxy<UiCommand>,
    pub(crate) quit_menu_id: MenuId,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run until Quit is chosen from the tray menu.
    #[instrument(skip_all)]
    pub(crate) async fn run(self) -> AppResult<()> {
        let App {
            controller,
            ui_proxy,
            quit_menu_id,
            shutdown_tx,
        } = self;

        info!("Tray Popup starting");

        let controller_handle = tokio::spawn(controller.run(shutdown_tx.subscribe()));

        // Menu event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // has a blocking recv(), so one thread waits without polling.
        //
        // Shutdown: when menu_event_rx is dropped, the next blocking_send()
        // fails and the forwarding loop breaks.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        while let Some(event) = menu_event_rx.recv().await {
            if event.id == quit_menu_id {
                info!("Quit requested from tray menu");
                break;
            }
            debug!(menu_id = ?event.id, "Ignoring unknown menu event");
        }

        drop(menu_event_rx);

        // Stop the controller first so it can close an open popup while the
        // event loop is still running.
        let _ = shutdown_tx.send(true);
        if let Err(e) = controller_handle.await {
            error!(error = ?e, "Tray controller task panicked");
        }

        ui_proxy
            .send_event(UiCommand::Shutdown)
            .map_err(|_| AppError::EventLoopClosed {
                location: ErrorLocation::from(Location::caller()),
            })?;

        match tokio::time::timeout(Duration::from_secs(1), menu_handle).await {
            Ok(Ok(())) => info!("Menu event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Menu event forwarder task panicked"),
            Err(_) => info!(
                "Menu event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        info!("Tray Popup shut down successfully");

        Ok(())
    }
}
