use crate::domain::{project::ProjectStatus, validation::Constraints};
use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for one list on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListColumn {
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl ListColumn {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            heading: None,
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Heading shown above the list, "ACTIVE PROJECTS" unless overridden
    pub fn heading(&self) -> String {
        self.heading
            .clone()
            .unwrap_or_else(|| format!("{} PROJECTS", self.status.key().to_uppercase()))
    }
}

/// Validation rules for the three form fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRules {
    pub title: Constraints,
    pub description: Constraints,
    pub people: Constraints,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: Constraints::required(),
            description: Constraints::required().with_min_length(5),
            people: Constraints::required().with_range(1.0, 5.0),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub lists: Vec<ListColumn>,
    #[serde(default)]
    pub form: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Projects".to_string(),
            lists: ProjectStatus::ALL.into_iter().map(ListColumn::new).collect(),
            form: FormRules::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Requires at least one list and no status shown twice
    pub fn validate(&self) -> Result<()> {
        if self.lists.is_empty() {
            return Err(TrackerError::ConfigError(
                "board must define at least one list".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.lists {
            if !seen.insert(column.status) {
                return Err(TrackerError::ConfigError(format!(
                    "status '{}' has more than one list",
                    column.status
                )));
            }
        }
        Ok(())
    }

    /// Gets the list configuration for a status
    pub fn get_list_for_status(&self, status: ProjectStatus) -> Option<&ListColumn> {
        self.lists.iter().find(|col| col.status == status)
    }
}
