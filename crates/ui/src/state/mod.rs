//! Headless state of the saved requests panel.

mod saved_list;
mod saved_panel;
mod services;
#[cfg(test)]
pub(crate) mod test_support;

pub use saved_list::{ListEvent, ListRow, SavedPanelList};
pub use saved_panel::{KeyPress, MenuAction, PanelOverlays, SavedRequestsPanel};
pub use services::PanelServices;
