//! Test doubles for the host, assets and window factory.

use crate::{
    AttachedWindowFactory, ClickEvent, ClickSink, IconAssetProvider, IconImage, OnClosed,
    PopupWindow, Rect, TrayController, TrayError, TrayHost, TrayIconHandle, TrayOptions,
    TrayResult, WindowConfig,
};

use std::{
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, oneshot};

pub(crate) struct MockAssets;

impl IconAssetProvider for MockAssets {
    fn icon_image(&self) -> TrayResult<IconImage> {
        Ok(IconImage {
            rgba: vec![0; 16 * 16 * 4],
            width: 16,
            height: 16,
        })
    }

    fn localized_string(&self, key: &str) -> String {
        format!("localized:{key}")
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockIcon {
    pub(crate) tooltip: Arc<Mutex<Option<String>>>,
    pub(crate) sink: Arc<Mutex<Option<ClickSink>>>,
}

impl TrayIconHandle for MockIcon {
    fn set_tooltip(&self, text: &str) -> TrayResult<()> {
        if let Ok(mut tooltip) = self.tooltip.lock() {
            *tooltip = Some(text.to_string());
        }
        Ok(())
    }

    fn on_click(&self, sink: ClickSink) -> TrayResult<()> {
        if let Ok(mut slot) = self.sink.lock() {
            *slot = Some(sink);
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockHost {
    pub(crate) registered: Vec<MockIcon>,
}

impl TrayHost for MockHost {
    type Icon = MockIcon;

    fn register_icon(&mut self, _image: IconImage) -> TrayResult<MockIcon> {
        let icon = MockIcon::default();
        self.registered.push(icon.clone());
        Ok(icon)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MockWindow {
    pub(crate) name: &'static str,
    pub(crate) closes: Arc<AtomicUsize>,
}

impl MockWindow {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl PopupWindow for MockWindow {
    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) struct WindowRequest {
    pub(crate) config: WindowConfig,
    pub(crate) reply: oneshot::Sender<TrayResult<MockWindow>>,
}

/// Factory whose constructions are resolved by the test.
pub(crate) struct MockFactory {
    requests: mpsc::UnboundedSender<WindowRequest>,
}

impl MockFactory {
    pub(crate) fn new(requests: mpsc::UnboundedSender<WindowRequest>) -> Self {
        Self { requests }
    }
}

impl AttachedWindowFactory for MockFactory {
    type Window = MockWindow;

    async fn create(&self, config: WindowConfig) -> TrayResult<MockWindow> {
        let (reply, reply_rx) = oneshot::channel();
        let _ = self.requests.send(WindowRequest { config, reply });

        reply_rx.await.map_err(|_| TrayError::Construction {
            reason: "test dropped the request".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
    }
}

pub(crate) fn construction_error(reason: &str) -> TrayError {
    TrayError::Construction {
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub(crate) fn icon_bounds() -> Rect {
    Rect::new(10.0, 20.0, 16.0, 16.0)
}

pub(crate) struct Harness {
    pub(crate) controller: TrayController<MockFactory>,
    pub(crate) host: MockHost,
    pub(crate) icon: MockIcon,
    pub(crate) requests: mpsc::UnboundedReceiver<WindowRequest>,
}

impl Harness {
    pub(crate) fn new(options: TrayOptions<MockWindow>) -> TrayResult<Self> {
        let (requests_tx, requests) = mpsc::unbounded_channel();
        let mut host = MockHost::default();
        let factory = MockFactory::new(requests_tx);

        let (icon, controller) = TrayController::create(options, &MockAssets, &mut host, factory)?;

        Ok(Self {
            controller,
            host,
            icon,
            requests,
        })
    }

    /// Deliver a click the way the host would.
    pub(crate) fn click(&self, bounds: Rect) {
        let sink = self.icon.sink.lock().ok().and_then(|s| s.clone());
        if let Some(sink) = sink {
            sink.click(ClickEvent {
                icon_id: "tray".to_string(),
                bounds,
                point: bounds.center(),
            });
        }
    }

    /// Click, let the factory build `window`, and return its close callback.
    #[allow(clippy::unwrap_used)]
    pub(crate) async fn open(&mut self, window: MockWindow) -> OnClosed {
        self.click(icon_bounds());
        assert!(self.controller.step().await);

        let request = self.requests.recv().await.unwrap();
        let on_closed = request.config.on_closed.clone();
        assert!(request.reply.send(Ok(window)).is_ok());

        assert!(self.controller.step().await);
        on_closed
    }
}
