use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::error::TrackerError;

/// Unique identifier for a project, a random UUID v4 in hyphenated form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a fresh random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(|uuid| Self(uuid.hyphenated().to_string()))
            .map_err(|_| TrackerError::InvalidProjectId(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a project; each status owns one list on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Lowercase key used for element IDs ("active", "finished")
    pub fn key(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(TrackerError::InvalidStatus(s.to_string())),
        }
    }
}

/// A tracked project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an active project with the given ID
    pub fn new(id: ProjectId, title: String, description: String, people: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the status. Returns false when the project already had it.
    pub fn set_status(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = Utc::now();
        true
    }

    /// Headcount label, e.g. "1 person" or "3 persons"
    pub fn persons(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_and_parseable() {
        let a = ProjectId::generate();
        let b = ProjectId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());

        let parsed = ProjectId::from_str(a.as_str()).unwrap();
        assert_eq!(parsed, a);
    }

    #[test]
    fn test_project_id_parsing_normalizes() {
        let id = ProjectId::from_str("  67E55044-10B1-426F-9247-BB680E5FE0C8 ").unwrap();
        assert_eq!(id.as_str(), "67e55044-10b1-426f-9247-bb680e5fe0c8");

        assert!(ProjectId::from_str("").is_err());
        assert!(ProjectId::from_str("0.123456").is_err());
        assert!(ProjectId::from_str("not-a-project").is_err());
    }

    #[test]
    fn test_status_parsing_and_display() {
        assert_eq!(ProjectStatus::from_str("active").unwrap(), ProjectStatus::Active);
        assert_eq!(ProjectStatus::from_str("FINISHED").unwrap(), ProjectStatus::Finished);
        assert!(ProjectStatus::from_str("done").is_err());

        assert_eq!(ProjectStatus::Active.to_string(), "Active");
        assert_eq!(ProjectStatus::Finished.key(), "finished");
    }

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new(
            ProjectId::generate(),
            "Build API".to_string(),
            "Backend work".to_string(),
            3,
        );
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_set_status_reports_change() {
        let mut project = Project::new(
            ProjectId::generate(),
            "Docs".to_string(),
            "Write the guide".to_string(),
            1,
        );

        assert!(!project.set_status(ProjectStatus::Active));
        assert!(project.set_status(ProjectStatus::Finished));
        assert_eq!(project.status, ProjectStatus::Finished);
        assert!(project.updated_at >= project.created_at);
    }

    #[test]
    fn test_persons_label() {
        let mut project = Project::new(
            ProjectId::generate(),
            "Solo".to_string(),
            "One person job".to_string(),
            1,
        );
        assert_eq!(project.persons(), "1 person");

        project.people = 4;
        assert_eq!(project.persons(), "4 persons");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
        assert_eq!(json, "\"finished\"");

        let status: ProjectStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, ProjectStatus::Active);
    }
}
