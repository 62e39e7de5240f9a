//! Click-driven toggle of the attached popup window.
//!
//! The controller is a single-owner task. Clicks and close notifications
//! arrive on one channel, finished popup constructions on another, and only
//! the controller task ever touches the popup state.

use crate::{
    APP_NAME_KEY, AfterClickHook, AttachedWindowFactory, BeforeClickHook, ClickDecision,
    ClickEvent, ClickSink, ErrorHook, IconAssetProvider, OnClosed, PopupId, PopupWindow,
    TrayError, TrayHost, TrayIconHandle, TrayOptions, TrayResult, WindowConfig,
    controller::{Constructed, ControlEvent, PopupState, PopupStatus},
};

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe, Location},
    sync::Arc,
};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

/// Owns the popup toggle state for one tray icon.
pub struct TrayController<F: AttachedWindowFactory> {
    theme: String,
    factory: Arc<F>,
    state: PopupState<F::Window>,
    next_popup: u64,
    events_tx: mpsc::UnboundedSender<ControlEvent>,
    events_rx: mpsc::UnboundedReceiver<ControlEvent>,
    constructed_tx: mpsc::UnboundedSender<Constructed<F::Window>>,
    constructed_rx: mpsc::UnboundedReceiver<Constructed<F::Window>>,
    on_tray_icon_click: Option<BeforeClickHook>,
    after_tray_icon_click: Option<AfterClickHook<F::Window>>,
    on_error: Option<ErrorHook>,
}

impl<F: AttachedWindowFactory> TrayController<F> {
    /// Register the tray icon and build the controller that serves its clicks.
    ///
    /// The returned icon handle must be kept alive for as long as the icon
    /// should stay in the status bar. The controller does nothing until
    /// [`run`](Self::run) is polled.
    ///
    /// # Errors
    ///
    /// Returns [`TrayError::Configuration`] without touching `host` when no
    /// theme is set. Asset and host failures are passed through.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn create<H, A>(
        options: TrayOptions<F::Window>,
        assets: &A,
        host: &mut H,
        factory: F,
    ) -> TrayResult<(H::Icon, Self)>
    where
        H: TrayHost,
        A: IconAssetProvider + ?Sized,
    {
        let theme = match options.theme {
            Some(theme) if !theme.trim().is_empty() => theme,
            _ => {
                return Err(TrayError::Configuration {
                    reason: "Tray requires a theme".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        info!(theme = %theme, "Creating tray icon");

        let image = assets.icon_image()?;
        let icon = host.register_icon(image)?;
        icon.set_tooltip(&assets.localized_string(APP_NAME_KEY))?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (constructed_tx, constructed_rx) = mpsc::unbounded_channel();

        icon.on_click(ClickSink::new(events_tx.clone()))?;

        info!("Tray icon initialized");

        let controller = Self {
            theme,
            factory: Arc::new(factory),
            state: PopupState::Closed,
            next_popup: 1,
            events_tx,
            events_rx,
            constructed_tx,
            constructed_rx,
            on_tray_icon_click: options.on_tray_icon_click,
            after_tray_icon_click: options.after_tray_icon_click,
            on_error: options.on_error,
        };

        Ok((icon, controller))
    }

    /// Current toggle state.
    pub fn status(&self) -> PopupStatus {
        self.state.status()
    }

    /// The open popup, if any.
    pub fn popup_window(&self) -> Option<&F::Window> {
        match &self.state {
            PopupState::Open { window, .. } => Some(window),
            _ => None,
        }
    }

    /// Serve clicks until `shutdown_rx` changes or its sender is dropped.
    ///
    /// A popup still open at shutdown is closed.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) {
        info!("Tray controller running");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Tray controller shutting down");
                    break;
                }
                alive = self.step() => {
                    if !alive {
                        info!("All tray channels closed, shutting down");
                        break;
                    }
                }
            }
        }

        if let PopupState::Open { popup, window } =
            std::mem::replace(&mut self.state, PopupState::Closed)
        {
            info!(popup = %popup, "Closing popup on shutdown");
            window.close();
        }
    }

    /// Process one message. Returns `false` once no message can arrive anymore.
    pub(crate) async fn step(&mut self) -> bool {
        tokio::select! {
            biased;

            Some(done) = self.constructed_rx.recv() => {
                self.finish_opening(done);
                true
            }
            Some(event) = self.events_rx.recv() => {
                match event {
                    ControlEvent::Click(click) => self.handle_click(click),
                    ControlEvent::Closed(popup) => self.handle_closed(popup),
                }
                true
            }
            else => false,
        }
    }

    #[instrument(skip_all, fields(icon_id = %click.icon_id))]
    fn handle_click(&mut self, click: ClickEvent) {
        if self.before_click(&click) == ClickDecision::Suppress {
            debug!("Click suppressed by hook");
            return;
        }

        match std::mem::replace(&mut self.state, PopupState::Closed) {
            PopupState::Closed => self.begin_opening(click),
            opening @ PopupState::Opening { .. } => {
                // Re-entrant clicks would race a second construction.
                debug!("Popup still opening, ignoring click");
                self.state = opening;
            }
            PopupState::Open { popup, window } => {
                info!(popup = %popup, "Closing popup");
                window.close();
                notify_after(&mut self.after_tray_icon_click, &mut self.on_error, None);
            }
        }
    }

    fn begin_opening(&mut self, click: ClickEvent) {
        let popup = PopupId(self.next_popup);
        self.next_popup += 1;
        self.state = PopupState::Opening {
            popup,
            closed_early: false,
        };

        info!(popup = %popup, bounds = ?click.bounds, "Opening popup");

        let config = WindowConfig {
            theme: self.theme.clone(),
            bounds: click.bounds,
            on_closed: OnClosed::new(popup, self.events_tx.clone()),
        };
        let factory = Arc::clone(&self.factory);
        let constructed_tx = self.constructed_tx.clone();

        tokio::spawn(async move {
            let result = factory.create(config).await;
            if constructed_tx.send(Constructed { popup, result }).is_err() {
                debug!(popup = %popup, "Tray controller stopped before popup was ready");
            }
        });
    }

    fn finish_opening(&mut self, done: Constructed<F::Window>) {
        let Constructed { popup, result } = done;

        match std::mem::replace(&mut self.state, PopupState::Closed) {
            PopupState::Opening {
                popup: pending,
                closed_early,
            } if pending == popup => match result {
                Ok(_window) if closed_early => {
                    info!(popup = %popup, "Popup closed before construction finished");
                }
                Ok(window) => {
                    info!(popup = %popup, "Popup opened");
                    self.state = PopupState::Open { popup, window };
                    if let PopupState::Open { window, .. } = &self.state {
                        notify_after(
                            &mut self.after_tray_icon_click,
                            &mut self.on_error,
                            Some(window),
                        );
                    }
                }
                Err(e) => {
                    warn!(popup = %popup, "Popup construction failed");
                    report(&mut self.on_error, &e);
                }
            },
            other => {
                self.state = other;
                warn!(popup = %popup, "Discarding construction result for stale popup");
                if let Ok(window) = result {
                    window.close();
                }
            }
        }
    }

    fn handle_closed(&mut self, popup: PopupId) {
        match &mut self.state {
            PopupState::Opening {
                popup: current,
                closed_early,
            } if *current == popup => {
                debug!(popup = %popup, "Popup closed while opening");
                *closed_early = true;
                return;
            }
            PopupState::Open { popup: current, .. } if *current == popup => {}
            _ => {
                debug!(popup = %popup, "Ignoring close notification for inactive popup");
                return;
            }
        }

        self.state = PopupState::Closed;
        info!(popup = %popup, "Popup closed");
    }

    fn before_click(&mut self, click: &ClickEvent) -> ClickDecision {
        let Some(hook) = self.on_tray_icon_click.as_mut() else {
            return ClickDecision::Proceed;
        };

        match panic::catch_unwind(AssertUnwindSafe(|| hook(click))) {
            Ok(decision) => decision,
            Err(payload) => {
                report(
                    &mut self.on_error,
                    &hook_panicked("on_tray_icon_click", payload),
                );
                ClickDecision::Suppress
            }
        }
    }
}

fn notify_after<W>(
    hook: &mut Option<AfterClickHook<W>>,
    on_error: &mut Option<ErrorHook>,
    window: Option<&W>,
) {
    let Some(hook) = hook.as_mut() else {
        return;
    };

    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| hook(window))) {
        report(on_error, &hook_panicked("after_tray_icon_click", payload));
    }
}

fn report(on_error: &mut Option<ErrorHook>, err: &TrayError) {
    match on_error {
        Some(hook) => {
            if panic::catch_unwind(AssertUnwindSafe(|| hook(err))).is_err() {
                error!(error = %err, "Error hook panicked while reporting");
            }
        }
        None => error!(error = ?err, "Tray controller error"),
    }
}

#[track_caller]
fn hook_panicked(hook: &'static str, payload: Box<dyn Any + Send>) -> TrayError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    TrayError::HookPanicked {
        hook,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
