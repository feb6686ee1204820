//! # Project Tracker Core
//!
//! State, validation and drag-and-drop logic for the project tracker widget.
//!
//! Projects are entered through a form, shown as cards in an "active" and a
//! "finished" list, and moved between the lists by dragging. This crate owns
//! everything except painting: a host feeds [`UiEvent`]s into a
//! [`ProjectTracker`] and renders the [`BoardView`] it returns.

pub mod components;
pub mod dnd;
pub mod domain;
pub mod error;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use components::{BoardView, FormFields, ProjectInput, ProjectItem, ProjectList};
pub use dnd::{DataTransfer, DragEvent, DragSession, DragState, DragTarget, Draggable};
pub use domain::{
    board::{BoardConfig, FormRules, ListColumn},
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, Constraints, FieldValue, Validatable},
};
pub use error::{Result, TrackerError};
pub use store::{ProjectStore, SharedStore, Snapshot};
pub use tracker::{LogNotifier, Notifier, ProjectTracker, UiEvent};
