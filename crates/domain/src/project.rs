//! Projects and the bookkeeping for adding requests to them.

use serde::{Deserialize, Serialize};

use crate::record::SavedRequestRecord;

/// A stored project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Store identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Identifiers of the requests in the project.
    #[serde(default)]
    pub requests: Vec<String>,
}

/// A project to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Identifiers of the requests the project starts with.
    pub requests: Vec<String>,
}

/// Project labels chosen by the user, split by whether the project exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCreationBatch {
    /// Names of projects that must be created.
    pub add: Vec<String>,
    /// Identifiers of projects that already exist.
    pub existing: Vec<String>,
}

impl ProjectCreationBatch {
    /// Splits labels into new project names and existing project identifiers.
    ///
    /// A label is existing when it equals the identifier or the name of a
    /// known project; name matches resolve to that project's identifier.
    #[must_use]
    pub fn partition(labels: &[String], known: &[Project]) -> Self {
        let mut batch = Self::default();
        for label in labels {
            let found = known
                .iter()
                .find(|project| project.id == *label)
                .or_else(|| known.iter().find(|project| project.name == *label));
            match found {
                Some(project) => batch.existing.push(project.id.clone()),
                None => batch.add.push(label.clone()),
            }
        }
        batch
    }

    /// Builds the creation payloads for the new names.
    #[must_use]
    pub fn new_projects(&self, request_ids: &[String]) -> Vec<NewProject> {
        self.add
            .iter()
            .map(|name| NewProject {
                name: name.clone(),
                requests: request_ids.to_vec(),
            })
            .collect()
    }
}

/// Combines existing identifiers with the identifiers of created projects.
///
/// Existing identifiers come first.
#[must_use]
pub fn prepare_project_ids(created: Option<&[Project]>, existing: Option<&[String]>) -> Vec<String> {
    let mut ids = existing.map(<[String]>::to_vec).unwrap_or_default();
    if let Some(created) = created {
        ids.extend(created.iter().map(|project| project.id.clone()));
    }
    ids
}

/// Adds project identifiers to every record.
///
/// A legacy project reference is merged first without duplicating it. The
/// new identifiers are appended as given, even if a record already lists
/// some of them.
pub fn update_records_projects(records: &mut [SavedRequestRecord], ids: &[String]) {
    for record in records {
        record.merge_legacy_project();
        record.projects.extend_from_slice(ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.into(),
            name: name.into(),
            requests: Vec::new(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_prepare_ids_without_arguments() {
        assert!(prepare_project_ids(None, None).is_empty());
    }

    #[test]
    fn test_prepare_ids_without_created() {
        let ids = strings(&["x"]);
        assert_eq!(prepare_project_ids(Some(&[][..]), Some(ids.as_slice())), ids);
    }

    #[test]
    fn test_prepare_ids_appends_created() {
        let ids = strings(&["x"]);
        let created = [project("c", "new")];
        assert_eq!(
            prepare_project_ids(Some(&created[..]), Some(ids.as_slice())),
            strings(&["x", "c"])
        );
    }

    #[test]
    fn test_update_creates_projects() {
        let mut records = vec![SavedRequestRecord::default()];
        update_records_projects(&mut records, &strings(&["p1"]));
        assert_eq!(records[0].projects, strings(&["p1"]));
    }

    #[test]
    fn test_update_merges_legacy_project() {
        let mut records = vec![SavedRequestRecord {
            legacy_project: Some("L".into()),
            ..SavedRequestRecord::default()
        }];
        update_records_projects(&mut records, &strings(&["p1"]));
        assert_eq!(records[0].projects, strings(&["L", "p1"]));
        assert_eq!(records[0].legacy_project, None);
    }

    #[test]
    fn test_update_ignores_listed_legacy_project() {
        let mut records = vec![SavedRequestRecord {
            legacy_project: Some("L".into()),
            projects: strings(&["L"]),
            ..SavedRequestRecord::default()
        }];
        update_records_projects(&mut records, &strings(&["p1"]));
        assert_eq!(records[0].projects, strings(&["L", "p1"]));
    }

    #[test]
    fn test_update_does_not_dedupe_new_ids() {
        let mut records = vec![SavedRequestRecord {
            projects: strings(&["p1"]),
            ..SavedRequestRecord::default()
        }];
        update_records_projects(&mut records, &strings(&["p1"]));
        assert_eq!(records[0].projects, strings(&["p1", "p1"]));
    }

    #[test]
    fn test_partition_by_id_and_name() {
        let known = [project("id-1", "Billing"), project("id-2", "Users")];
        let batch = ProjectCreationBatch::partition(&strings(&["id-1", "Users", "Fresh"]), &known);

        assert_eq!(batch.existing, strings(&["id-1", "id-2"]));
        assert_eq!(batch.add, strings(&["Fresh"]));
    }

    #[test]
    fn test_new_projects_share_request_ids() {
        let batch = ProjectCreationBatch {
            add: strings(&["a", "b"]),
            existing: Vec::new(),
        };
        let projects = batch.new_projects(&strings(&["r1"]));
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p.requests == strings(&["r1"])));
    }
}
