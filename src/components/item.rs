use crate::{
    components::ItemView,
    dnd::{DragEvent, Draggable, EffectAllowed, PROJECT_ID_MIME},
    domain::Project,
};

/// A single draggable project card
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn render(&self) -> ItemView {
        ItemView {
            element_id: self.project.id.to_string(),
            title: self.project.title.clone(),
            assigned: format!("{} assigned", self.project.persons()),
            description: self.project.description.clone(),
            draggable: true,
        }
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, event: &mut DragEvent) {
        let transfer = event.data_transfer.get_or_insert_with(Default::default);
        transfer.set_data(PROJECT_ID_MIME, self.project.id.as_str());
        transfer.effect_allowed = EffectAllowed::Move;
    }

    fn drag_end(&self, _event: &mut DragEvent) {
        tracing::trace!(project_id = %self.project.id, "drag ended");
    }
}
