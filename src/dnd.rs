//! Drag-and-drop protocol: payload transfer, drag events, the session state
//! machine and the two capability traits implemented by cards and lists.

use crate::{
    domain::{ProjectId, ProjectStatus},
    error::{Result, TrackerError},
};
use std::{fmt, str::FromStr};

/// MIME type under which a card publishes its project ID
pub const PROJECT_ID_MIME: &str = "text/plain";

/// Operations the drag source allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectAllowed {
    #[default]
    Uninitialized,
    None,
    Copy,
    Move,
    Link,
    All,
}

/// Typed payload carried through a drag session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: EffectAllowed,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores data under a MIME type, replacing earlier data of that type
    pub fn set_data(&mut self, mime: &str, data: impl Into<String>) {
        let data = data.into();
        match self.entries.iter_mut().find(|(kind, _)| kind == mime) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((mime.to_string(), data)),
        }
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(kind, _)| kind == mime)
            .map(|(_, data)| data.as_str())
    }

    /// MIME types in the order they were first set
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(kind, _)| kind.as_str()).collect()
    }

    /// Reads the project ID published by a card
    pub fn project_id(&self) -> Result<ProjectId> {
        let raw = self
            .get_data(PROJECT_ID_MIME)
            .ok_or(TrackerError::MissingDragPayload)?;
        ProjectId::from_str(raw)
    }
}

/// One drag event as delivered to a handler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragEvent {
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    /// An event without any data transfer attached
    pub fn empty() -> Self {
        Self::default()
    }

    /// Marks the event as handled; on dragover this is what allows a drop
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something a user can pick up and drag
pub trait Draggable {
    fn drag_start(&self, event: &mut DragEvent);

    fn drag_end(&self, event: &mut DragEvent);
}

/// Something a dragged card can be dropped on
pub trait DragTarget {
    fn drag_over(&self, event: &mut DragEvent);

    /// Handles the drop itself; reads the payload and performs the move
    fn drop_payload(&self, event: &mut DragEvent);

    fn drag_leave(&self, event: &mut DragEvent);
}

/// State of the current drag session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { project_id: ProjectId },
    Dropped { project_id: ProjectId, target: ProjectStatus },
    Cancelled { project_id: ProjectId },
}

impl DragState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Dropped { .. } => "dropped",
            Self::Cancelled { .. } => "cancelled",
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tracks one drag at a time: idle -> dragging -> dropped | cancelled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Project currently being dragged, if any
    pub fn dragged_project(&self) -> Option<&ProjectId> {
        match &self.state {
            DragState::Dragging { project_id } => Some(project_id),
            _ => None,
        }
    }

    /// Begins a new session. A session still dragging cannot be restarted.
    pub fn start(&mut self, project_id: ProjectId) -> Result<()> {
        if self.state.is_dragging() {
            return Err(self.invalid("dragging"));
        }
        self.state = DragState::Dragging { project_id };
        Ok(())
    }

    /// Records a drop on the list for `target`
    pub fn drop_on(&mut self, target: ProjectStatus) -> Result<ProjectId> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { project_id } => {
                self.state = DragState::Dropped {
                    project_id: project_id.clone(),
                    target,
                };
                Ok(project_id)
            }
            other => {
                self.state = other;
                Err(self.invalid("dropped"))
            }
        }
    }

    /// Ends the session. A drag that was never dropped becomes cancelled;
    /// the dragend that follows a drop leaves the session dropped.
    pub fn end(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { project_id } => {
                self.state = DragState::Cancelled { project_id };
                Ok(())
            }
            dropped @ DragState::Dropped { .. } => {
                self.state = dropped;
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("ended"))
            }
        }
    }

    fn invalid(&self, to: &str) -> TrackerError {
        TrackerError::InvalidDragTransition {
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}
