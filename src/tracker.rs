use crate::{
    components::{
        BoardView, ProjectInput, ProjectItem, ProjectList, SubmitEvent, INVALID_INPUT_NOTICE,
    },
    dnd::{DataTransfer, DragEvent, DragSession, DragTarget, Draggable},
    domain::{BoardConfig, ProjectId, ProjectStatus},
    error::{Result, TrackerError},
    store::{ProjectStore, SharedStore, Snapshot},
};
use std::fmt;

/// Shows blocking notices to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that only writes the notice to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(notice = message, "user notice");
    }
}

/// Events a host forwards from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit,
    DragStart { project_id: ProjectId },
    DragOver { target: ProjectStatus },
    DragLeave { target: ProjectStatus },
    Drop { target: ProjectStatus },
    DragEnd,
}

/// Composition root: one store, one form and one list per configured status
pub struct ProjectTracker {
    config: BoardConfig,
    store: SharedStore,
    form: ProjectInput,
    lists: Vec<ProjectList>,
    session: DragSession,
    transfer: Option<DataTransfer>,
    drop_allowed: Option<ProjectStatus>,
    notifier: Box<dyn Notifier>,
}

impl ProjectTracker {
    pub fn new(config: BoardConfig, notifier: impl Notifier + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, Box::new(notifier)))
    }

    fn build(config: BoardConfig, notifier: Box<dyn Notifier>) -> Self {
        let store = ProjectStore::shared();
        let form = ProjectInput::new(config.form.clone(), &store);
        let lists = config
            .lists
            .iter()
            .map(|column| ProjectList::new(column, &store))
            .collect();

        Self {
            config,
            store,
            form,
            lists,
            session: DragSession::new(),
            transfer: None,
            drop_allowed: None,
            notifier,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.borrow().snapshot()
    }

    pub fn form(&self) -> &ProjectInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectInput {
        &mut self.form
    }

    pub fn lists(&self) -> &[ProjectList] {
        &self.lists
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn render(&self) -> BoardView {
        BoardView {
            name: self.config.name.clone(),
            form: self.form.render(),
            lists: self.lists.iter().map(ProjectList::render).collect(),
        }
    }

    /// Routes one UI event.
    ///
    /// Only a rejected submission is reported as an error; stray or
    /// malformed drag events are logged and ignored.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Submit => self.submit().map(|_| ()),
            UiEvent::DragStart { project_id } => {
                self.drag_start(project_id);
                Ok(())
            }
            UiEvent::DragOver { target } => {
                self.drag_over(target);
                Ok(())
            }
            UiEvent::DragLeave { target } => {
                self.drag_leave(target);
                Ok(())
            }
            UiEvent::Drop { target } => {
                self.drop_on(target);
                Ok(())
            }
            UiEvent::DragEnd => {
                self.drag_end();
                Ok(())
            }
        }
    }

    /// Submits the form, showing the notice when validation fails
    pub fn submit(&mut self) -> Result<ProjectId> {
        let mut event = SubmitEvent::new();
        match self.form.submit(&mut event) {
            Err(err @ TrackerError::InvalidInput { .. }) => {
                self.notifier.notify(INVALID_INPUT_NOTICE);
                Err(err)
            }
            other => other,
        }
    }

    /// Runs a full drag of one card onto the list for `target`
    pub fn drag_project(&mut self, project_id: &ProjectId, target: ProjectStatus) -> Result<()> {
        self.dispatch(UiEvent::DragStart {
            project_id: project_id.clone(),
        })?;
        self.dispatch(UiEvent::DragOver { target })?;
        self.dispatch(UiEvent::Drop { target })?;
        self.dispatch(UiEvent::DragEnd)
    }

    fn find_item(&self, project_id: &ProjectId) -> Option<ProjectItem> {
        self.lists
            .iter()
            .flat_map(ProjectList::items)
            .find(|item| &item.project().id == project_id)
    }

    fn find_list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        let list = self.list(status);
        if list.is_none() {
            tracing::debug!(%status, "no list shows this status");
        }
        list
    }

    fn drag_event(&self) -> DragEvent {
        self.transfer
            .clone()
            .map(DragEvent::new)
            .unwrap_or_else(DragEvent::empty)
    }

    fn drag_start(&mut self, project_id: ProjectId) {
        let Some(item) = self.find_item(&project_id) else {
            tracing::debug!(project_id = %project_id, "drag start ignored: no such card");
            return;
        };

        if let Err(err) = self.session.start(project_id) {
            tracing::debug!(error = %err, "drag start ignored");
            return;
        }

        let mut event = DragEvent::empty();
        item.drag_start(&mut event);
        self.transfer = event.data_transfer;
        self.drop_allowed = None;
    }

    fn drag_over(&mut self, target: ProjectStatus) {
        let mut event = self.drag_event();
        let Some(list) = self.find_list(target) else {
            return;
        };

        list.drag_over(&mut event);
        if event.default_prevented() {
            self.drop_allowed = Some(target);
        }
    }

    fn drag_leave(&mut self, target: ProjectStatus) {
        let mut event = self.drag_event();
        let Some(list) = self.find_list(target) else {
            return;
        };

        list.drag_leave(&mut event);
        if self.drop_allowed == Some(target) {
            self.drop_allowed = None;
        }
    }

    fn drop_on(&mut self, target: ProjectStatus) {
        if self.drop_allowed != Some(target) {
            tracing::debug!(%target, "drop ignored: target did not accept the drag");
            return;
        }

        if let Err(err) = self.session.drop_on(target) {
            tracing::debug!(error = %err, "drop ignored");
            return;
        }

        let mut event = self.drag_event();
        if let Some(list) = self.find_list(target) {
            list.drop_payload(&mut event);
        }
        self.drop_allowed = None;
    }

    fn drag_end(&mut self) {
        let mut event = self.drag_event();
        if let Some(item) = self
            .session
            .dragged_project()
            .and_then(|id| self.find_item(id))
        {
            item.drag_end(&mut event);
        }

        if let Err(err) = self.session.end() {
            tracing::debug!(error = %err, "drag end ignored");
        }
        self.transfer = None;
        self.drop_allowed = None;
    }
}

impl Default for ProjectTracker {
    fn default() -> Self {
        Self::build(BoardConfig::default(), Box::new(LogNotifier))
    }
}

impl fmt::Debug for ProjectTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectTracker")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("lists", &self.lists)
            .field("session", &self.session)
            .finish()
    }
}
