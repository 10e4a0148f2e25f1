//! Saved Requests UI - Headless panel state
//!
//! This crate holds the view state of the saved requests panel and the
//! command/update bridge a host view talks to. Rendering is left to the host.

pub mod bridge;
pub mod capabilities;
pub mod dnd;
pub mod error;
pub mod notice;
pub mod state;

pub use bridge::{PanelCommand, PanelUpdate, run_panel_runtime};
pub use capabilities::{Deletable, Exportable, ProjectAssociable, Selectable};
pub use dnd::{DragEvent, DragEventKind};
pub use error::{Collaborator, PanelError, PanelResult};
pub use notice::Notice;
pub use state::{
    KeyPress, ListEvent, ListRow, MenuAction, PanelOverlays, PanelServices, SavedPanelList,
    SavedRequestsPanel,
};
