//! Assign projects use case.

use std::sync::Arc;

use saved_requests_domain::{
    Project, ProjectCreationBatch, RecordKind, SavedRequestRecord, prepare_project_ids,
    update_records_projects,
};

use crate::{ApplicationError, ApplicationResult};
use crate::ports::{ProjectStore, RecordStore};

/// Input for adding records to projects.
#[derive(Debug, Clone)]
pub struct AssignProjectsInput {
    /// Records to update. Expected to be persisted records.
    pub records: Vec<SavedRequestRecord>,
    /// Project labels chosen by the user: names or identifiers.
    pub labels: Vec<String>,
    /// Projects known to the panel, used to resolve the labels.
    pub known_projects: Vec<Project>,
}

/// Output from adding records to projects.
#[derive(Debug, Clone)]
pub struct AssignProjectsOutput {
    /// Records as stored after the update.
    pub records: Vec<SavedRequestRecord>,
    /// Projects created for new labels.
    pub created: Vec<Project>,
}

/// Use case for adding records to existing and new projects.
pub struct AssignProjects<R: RecordStore + ?Sized, P: ProjectStore + ?Sized> {
    records: Arc<R>,
    projects: Option<Arc<P>>,
}

impl<R: RecordStore + ?Sized, P: ProjectStore + ?Sized> AssignProjects<R, P> {
    /// Creates a new `AssignProjects` use case.
    ///
    /// The project store is only needed when a label names a new project.
    #[must_use]
    pub const fn new(records: Arc<R>, projects: Option<Arc<P>>) -> Self {
        Self { records, projects }
    }

    /// Adds the records to the labelled projects.
    ///
    /// Labels that do not name a known project are created first, already
    /// containing the records. Every record then gets the existing and the
    /// created project identifiers, and the batch is stored.
    ///
    /// # Errors
    /// - Returns error if a new project is needed and no project store is set
    /// - Returns error if project creation is rejected
    /// - Returns error if the bulk update is rejected
    pub async fn execute(&self, input: AssignProjectsInput) -> ApplicationResult<AssignProjectsOutput> {
        let batch = ProjectCreationBatch::partition(&input.labels, &input.known_projects);
        let mut records = input.records;

        let created = if batch.add.is_empty() {
            Vec::new()
        } else {
            let projects = self.projects.as_ref().ok_or_else(|| {
                ApplicationError::Project("no project store to create projects in".into())
            })?;
            let request_ids: Vec<String> = records.iter().filter_map(|r| r.id.clone()).collect();
            projects
                .create_bulk(batch.new_projects(&request_ids))
                .await?
        };

        let ids = prepare_project_ids(Some(created.as_slice()), Some(batch.existing.as_slice()));
        update_records_projects(&mut records, &ids);

        let records = self.records.update_bulk(RecordKind::Saved, &records).await?;
        Ok(AssignProjectsOutput { records, created })
    }
}
