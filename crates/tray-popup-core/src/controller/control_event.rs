use crate::{ClickEvent, PopupId, TrayResult};

/// Messages from the host side into the controller task.
#[derive(Debug)]
pub(crate) enum ControlEvent {
    /// The tray icon was clicked.
    Click(ClickEvent),
    /// A popup reported that it closed.
    Closed(PopupId),
}

/// Result of an in-flight popup construction.
pub(crate) struct Constructed<W> {
    pub(crate) popup: PopupId,
    pub(crate) result: TrayResult<W>,
}
