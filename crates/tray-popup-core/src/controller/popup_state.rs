use crate::PopupId;

/// Toggle state owned by the controller.
pub(crate) enum PopupState<W> {
    /// No popup exists.
    Closed,
    /// The factory is building `popup`.
    Opening {
        popup: PopupId,
        /// `on_closed` fired before the factory resolved.
        closed_early: bool,
    },
    /// `window` is on screen.
    Open { popup: PopupId, window: W },
}

impl<W> PopupState<W> {
    pub(crate) fn status(&self) -> PopupStatus {
        match self {
            PopupState::Closed => PopupStatus::Closed,
            PopupState::Opening { .. } => PopupStatus::Opening,
            PopupState::Open { .. } => PopupStatus::Open,
        }
    }
}

/// Observable summary of the toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupStatus {
    /// No popup exists.
    Closed,
    /// A popup is being constructed.
    Opening,
    /// A popup is on screen.
    Open,
}
