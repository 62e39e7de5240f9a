mod control_event;
mod popup_state;
mod tray_controller;

pub(crate) use {
    control_event::{ControlEvent, Constructed},
    popup_state::PopupState,
};

pub use {popup_state::PopupStatus, tray_controller::TrayController};
