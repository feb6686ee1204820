//! Form, list and card components plus the view models they render to.
//!
//! View models carry exactly what a host needs to fill the `project-input`,
//! `project-list` and `single-project` templates.

use serde::Serialize;

pub mod input;
pub mod item;
pub mod list;

pub use input::{FormFields, ProjectInput, SubmitEvent, INVALID_INPUT_NOTICE};
pub use item::ProjectItem;
pub use list::ProjectList;

/// One card (`single-project` template)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub element_id: String,
    pub title: String,
    pub assigned: String,
    pub description: String,
    pub draggable: bool,
}

/// One list (`project-list` template)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub element_id: String,
    pub list_id: String,
    pub heading: String,
    pub droppable: bool,
    pub items: Vec<ItemView>,
}

/// The entry form (`project-input` template)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub element_id: String,
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Everything on the board, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub name: String,
    pub form: FormView,
    pub lists: Vec<ListView>,
}
