//! User visible notices.
//!
//! The panel queues a notice for every outcome the user should see. The host
//! drains the queue with `SavedRequestsPanel::take_notices` and renders them
//! as toasts.

use std::fmt;

/// A toast produced by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A collaborator the operation needs is not wired.
    ModelNotFound,
    /// Requests were deleted. Offers a revert action.
    Deleted {
        /// Number of deleted requests.
        count: usize,
    },
    /// Restoring deleted requests failed.
    RevertError,
    /// No export module is wired.
    ExportModuleNotFound,
    /// The export went to the remote drive.
    DriveSaved,
    /// Clearing the data store failed.
    DataClearError,
    /// Adding requests to projects failed.
    ProjectUpdateError,
    /// Any other failure, with the collaborator's message.
    Error(String),
}

impl Notice {
    /// Whether the toast renders the revert action.
    #[must_use]
    pub const fn has_revert_action(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }

    /// Whether the toast is styled as an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Deleted { .. } | Self::DriveSaved)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelNotFound => f.write_str("Model not found. Please, report an issue."),
            Self::Deleted { count: 1 } => f.write_str("The request has been removed."),
            Self::Deleted { count } => write!(f, "{count} requests has been removed."),
            Self::RevertError => f.write_str("Unable to revert changes. Please, report an issue."),
            Self::ExportModuleNotFound => {
                f.write_str("Export module not found. Please, report an issue.")
            }
            Self::DriveSaved => f.write_str("Requests saved on Google Drive."),
            Self::DataClearError => f.write_str("Datasore delete error. Please report an issue"),
            Self::ProjectUpdateError => f.write_str(
                "Unable to update request detaile. See console for debug message.",
            ),
            Self::Error(message) => f.write_str(message),
        }
    }
}
