use crate::{
    components::{item::ProjectItem, ListView},
    dnd::{DragEvent, DragTarget, PROJECT_ID_MIME},
    domain::{ListColumn, ProjectStatus},
    store::{SharedStore, Snapshot},
};
use std::{cell::RefCell, rc::Rc};

/// Rendered contents of a list, rewritten on every store notification
#[derive(Debug, Default)]
struct ListState {
    items: Vec<ProjectItem>,
    droppable: bool,
}

impl ListState {
    fn assign(&mut self, snapshot: &Snapshot, status: ProjectStatus) {
        self.items = snapshot
            .with_status(status)
            .into_iter()
            .map(ProjectItem::new)
            .collect();
    }
}

/// Drop-target list showing every project in one status
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    heading: String,
    store: SharedStore,
    state: Rc<RefCell<ListState>>,
}

impl ProjectList {
    /// Creates the list and subscribes it to the store.
    ///
    /// The list starts out showing whatever the store already holds.
    pub fn new(column: &ListColumn, store: &SharedStore) -> Self {
        let status = column.status;
        let state = Rc::new(RefCell::new(ListState::default()));
        state.borrow_mut().assign(&store.borrow().snapshot(), status);

        let sink = Rc::clone(&state);
        store.borrow_mut().subscribe(move |snapshot| {
            sink.borrow_mut().assign(snapshot, status);
        });

        Self {
            status,
            heading: column.heading(),
            store: Rc::clone(store),
            state,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Host element ID, e.g. "active-projects"
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status.key())
    }

    /// ID of the inner list element, e.g. "active-projects-list"
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.key())
    }

    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    /// Card for the project at `index`, in store order
    pub fn item(&self, index: usize) -> Option<ProjectItem> {
        self.state.borrow().items.get(index).cloned()
    }

    pub fn items(&self) -> Vec<ProjectItem> {
        self.state.borrow().items.clone()
    }

    pub fn render(&self) -> ListView {
        let state = self.state.borrow();
        ListView {
            element_id: self.element_id(),
            list_id: self.list_id(),
            heading: self.heading.clone(),
            droppable: state.droppable,
            items: state.items.iter().map(ProjectItem::render).collect(),
        }
    }

    fn set_droppable(&self, droppable: bool) {
        self.state.borrow_mut().droppable = droppable;
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&self, event: &mut DragEvent) {
        let carries_project = event
            .data_transfer
            .as_ref()
            .and_then(|transfer| transfer.types().first().copied())
            == Some(PROJECT_ID_MIME);

        if carries_project {
            event.prevent_default();
            self.set_droppable(true);
            tracing::trace!(list = %self.list_id(), "drag entered list");
        }
    }

    fn drop_payload(&self, event: &mut DragEvent) {
        event.prevent_default();
        self.set_droppable(false);

        let Some(transfer) = event.data_transfer.as_ref() else {
            tracing::debug!(list = %self.list_id(), "drop ignored: no data transfer");
            return;
        };

        match transfer.project_id() {
            Ok(project_id) => {
                self.store.borrow_mut().move_project(&project_id, self.status);
            }
            Err(err) => {
                tracing::debug!(list = %self.list_id(), error = %err, "drop ignored");
            }
        }
    }

    fn drag_leave(&self, _event: &mut DragEvent) {
        self.set_droppable(false);
        tracing::trace!(list = %self.list_id(), "drag left list");
    }
}
