use crate::{ClickDecision, ClickEvent, TrayError};

/// Runs before the toggle. Returning [`ClickDecision::Suppress`] vetoes it.
pub type BeforeClickHook = Box<dyn FnMut(&ClickEvent) -> ClickDecision + Send>;

/// Runs after the toggle with the new popup, or `None` when it was closed.
pub type AfterClickHook<W> = Box<dyn FnMut(Option<&W>) + Send>;

/// Receives errors the controller cannot return to a caller.
pub type ErrorHook = Box<dyn FnMut(&TrayError) + Send>;

/// Options accepted by [`TrayController::create`](crate::TrayController::create).
pub struct TrayOptions<W> {
    pub(crate) theme: Option<String>,
    pub(crate) on_tray_icon_click: Option<BeforeClickHook>,
    pub(crate) after_tray_icon_click: Option<AfterClickHook<W>>,
    pub(crate) on_error: Option<ErrorHook>,
}

impl<W> TrayOptions<W> {
    /// Empty options. A theme must be set before `create`.
    pub fn new() -> Self {
        Self {
            theme: None,
            on_tray_icon_click: None,
            after_tray_icon_click: None,
            on_error: None,
        }
    }

    /// Theme passed to the window factory for every popup.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Same as [`theme`](Self::theme) but leaves the option unset for `None`.
    pub fn maybe_theme(mut self, theme: Option<String>) -> Self {
        self.theme = theme;
        self
    }

    /// Hook run before any toggle logic.
    pub fn on_tray_icon_click<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ClickEvent) -> ClickDecision + Send + 'static,
    {
        self.on_tray_icon_click = Some(Box::new(hook));
        self
    }

    /// Hook run once the toggle completed.
    pub fn after_tray_icon_click<F>(mut self, hook: F) -> Self
    where
        F: FnMut(Option<&W>) + Send + 'static,
    {
        self.after_tray_icon_click = Some(Box::new(hook));
        self
    }

    /// Error reporting hook. Without one, errors are logged.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&TrayError) + Send + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }
}

impl<W> Default for TrayOptions<W> {
    fn default() -> Self {
        Self::new()
    }
}
