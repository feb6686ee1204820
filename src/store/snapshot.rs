use crate::domain::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Immutable copy of every project in the store at one revision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    revision: u64,
    projects: Vec<Project>,
}

impl Snapshot {
    pub fn new(revision: u64, projects: Vec<Project>) -> Self {
        Self { revision, projects }
    }

    /// Number of store mutations that happened before this snapshot was taken
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects in the given status, in creation order
    pub fn with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectId;

    fn project(title: &str, status: ProjectStatus) -> Project {
        let mut project = Project::new(
            ProjectId::generate(),
            title.to_string(),
            "Some description".to_string(),
            2,
        );
        project.set_status(status);
        project
    }

    #[test]
    fn test_with_status_keeps_order() {
        let snapshot = Snapshot::new(
            3,
            vec![
                project("A", ProjectStatus::Active),
                project("B", ProjectStatus::Finished),
                project("C", ProjectStatus::Active),
            ],
        );

        let active: Vec<String> = snapshot
            .with_status(ProjectStatus::Active)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(active, vec!["A", "C"]);
        assert_eq!(snapshot.with_status(ProjectStatus::Finished).len(), 1);
        assert_eq!(snapshot.revision(), 3);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = Snapshot::new(1, vec![project("A", ProjectStatus::Active)]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"revision\":1"));
        assert!(json.contains("\"status\":\"active\""));

        let decoded: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
