//! Project store port

use async_trait::async_trait;
use saved_requests_domain::{NewProject, Project};

use crate::ApplicationResult;

/// Collaborator that owns projects.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Lists known projects.
    ///
    /// # Errors
    /// Returns an error if the projects cannot be read.
    async fn list(&self) -> ApplicationResult<Vec<Project>>;

    /// Creates projects in one batch.
    ///
    /// # Returns
    /// The created projects, in the order given, with their identifiers.
    ///
    /// # Errors
    /// Returns an error if any project cannot be created.
    async fn create_bulk(&self, projects: Vec<NewProject>) -> ApplicationResult<Vec<Project>>;
}
