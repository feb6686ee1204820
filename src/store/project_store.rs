use crate::{
    domain::{Project, ProjectId, ProjectStatus},
    error::{Result, TrackerError},
    store::{Listener, SharedStore, Snapshot},
};
use std::{cell::RefCell, fmt, rc::Rc};

/// In-memory owner of every project and of the subscriber registry
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    revision: u64,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store behind a shareable handle
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Appends a new active project and notifies subscribers
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let mut id = ProjectId::generate();
        while self.get(&id).is_some() {
            id = ProjectId::generate();
        }

        let project = Project::new(id.clone(), title.into(), description.into(), people);
        tracing::debug!(project_id = %id, title = %project.title, people, "project added");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Changes a project's status.
    ///
    /// Unknown IDs and unchanged statuses are no-ops that notify nobody.
    /// Returns whether the store changed.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(project_id = %id, "move ignored: unknown project");
            return false;
        };

        if !project.set_status(status) {
            return false;
        }

        tracing::debug!(project_id = %id, %status, "project moved");
        self.notify();
        true
    }

    /// Registers a callback for every future mutation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Like [`get`](Self::get), but a missing project is an error
    pub fn require(&self, id: &ProjectId) -> Result<&Project> {
        self.get(id)
            .ok_or_else(|| TrackerError::ProjectNotFound(id.to_string()))
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.status == status)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.revision, self.projects.clone())
    }

    fn notify(&mut self) {
        self.revision += 1;
        let snapshot = self.snapshot();
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}
