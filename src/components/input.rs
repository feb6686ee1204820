use crate::{
    components::FormView,
    domain::{
        validation::{validate, Validatable},
        FormRules, ProjectId,
    },
    error::{Result, TrackerError},
    store::SharedStore,
};
use std::rc::Rc;

/// Notice shown when a submission fails validation
pub const INVALID_INPUT_NOTICE: &str = "Invalid input, please try again!";

/// A form submission as delivered to the handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Raw text of the three form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl FormFields {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// The project entry form
#[derive(Debug)]
pub struct ProjectInput {
    fields: FormFields,
    rules: FormRules,
    store: SharedStore,
}

impl ProjectInput {
    pub const ELEMENT_ID: &'static str = "user-input";

    pub fn new(rules: FormRules, store: &SharedStore) -> Self {
        Self {
            fields: FormFields::default(),
            rules,
            store: Rc::clone(store),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.fields.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.fields.description = description.into();
    }

    pub fn set_people(&mut self, people: impl Into<String>) {
        self.fields.people = people.into();
    }

    pub fn render(&self) -> FormView {
        FormView {
            element_id: Self::ELEMENT_ID.to_string(),
            title: self.fields.title.clone(),
            description: self.fields.description.clone(),
            people: self.fields.people.clone(),
        }
    }

    /// Handles a submission: validates, adds the project and clears the form.
    ///
    /// On invalid input the store and the fields are left untouched.
    pub fn submit(&mut self, event: &mut SubmitEvent) -> Result<ProjectId> {
        event.prevent_default();
        let (title, description, people) = self.gather_input()?;

        let id = self
            .store
            .borrow_mut()
            .add_project(title, description, people);
        self.fields.clear();
        Ok(id)
    }

    fn gather_input(&self) -> Result<(String, String, u32)> {
        let title = self.fields.title.clone();
        let description = self.fields.description.clone();
        let people = parse_people(&self.fields.people);

        let checks = [
            ("title", Validatable::new(title.as_str(), self.rules.title.clone())),
            (
                "description",
                Validatable::new(description.as_str(), self.rules.description.clone()),
            ),
            ("people", Validatable::new(people, self.rules.people.clone())),
        ];

        if let Some((field, _)) = checks.iter().find(|(_, input)| !validate(input)) {
            return Err(invalid(field));
        }

        // Headcount is stored as a whole, positive number
        if people.fract() != 0.0 || people < 1.0 || people > f64::from(u32::MAX) {
            return Err(invalid("people"));
        }

        Ok((title, description, people as u32))
    }
}

/// Reads the people field as a number: blank is zero, garbage is NaN
fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn invalid(field: &str) -> TrackerError {
    TrackerError::InvalidInput {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{validation::Constraints, ProjectStatus},
        store::ProjectStore,
    };

    fn form() -> (SharedStore, ProjectInput) {
        let store = ProjectStore::shared();
        let input = ProjectInput::new(FormRules::default(), &store);
        (store, input)
    }

    fn rejected_field(result: Result<ProjectId>) -> String {
        match result {
            Err(TrackerError::InvalidInput { field }) => field,
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_submission_adds_project() {
        let (store, mut input) = form();
        *input.fields_mut() = FormFields::new("Build API", "Backend work", "3");

        let mut event = SubmitEvent::new();
        let id = input.submit(&mut event).unwrap();

        assert!(event.default_prevented());
        let store = store.borrow();
        let project = store.get(&id).unwrap();
        assert_eq!(project.title, "Build API");
        assert_eq!(project.description, "Backend work");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(input.fields(), &FormFields::default());
    }

    #[test]
    fn test_invalid_submission_keeps_state() {
        let (store, mut input) = form();
        input.set_title("");
        input.set_description("Backend work");
        input.set_people("3");

        let mut event = SubmitEvent::new();
        let field = rejected_field(input.submit(&mut event));

        assert_eq!(field, "title");
        assert!(event.default_prevented());
        assert!(store.borrow().is_empty());
        assert_eq!(input.fields().description, "Backend work");
    }

    #[test]
    fn test_description_must_exceed_five_characters() {
        let (_store, mut input) = form();
        *input.fields_mut() = FormFields::new("Docs", "Short", "2");
        assert_eq!(rejected_field(input.submit(&mut SubmitEvent::new())), "description");

        input.set_description("Longer");
        assert!(input.submit(&mut SubmitEvent::new()).is_ok());
    }

    #[test]
    fn test_people_bounds() {
        let (store, mut input) = form();

        for people in ["", "0", "6", "abc", "2.5", "-1"] {
            *input.fields_mut() = FormFields::new("Docs", "Write the guide", people);
            assert_eq!(rejected_field(input.submit(&mut SubmitEvent::new())), "people");
        }
        assert!(store.borrow().is_empty());

        for people in ["1", " 5 ", "3.0"] {
            *input.fields_mut() = FormFields::new("Docs", "Write the guide", people);
            assert!(input.submit(&mut SubmitEvent::new()).is_ok());
        }
        assert_eq!(store.borrow().len(), 3);
    }

    #[test]
    fn test_custom_rules() {
        let store = ProjectStore::shared();
        let rules = FormRules {
            title: Constraints::required().with_max_length(5),
            description: Constraints::default(),
            people: Constraints::required().with_range(1.0, 100.0),
        };
        let mut input = ProjectInput::new(rules, &store);

        *input.fields_mut() = FormFields::new("Too long", "", "50");
        assert_eq!(rejected_field(input.submit(&mut SubmitEvent::new())), "title");

        input.set_title("Ok");
        let id = input.submit(&mut SubmitEvent::new()).unwrap();
        assert_eq!(store.borrow().get(&id).map(|p| p.people), Some(50));
    }

    #[test]
    fn test_render_form() {
        let (_store, mut input) = form();
        input.set_title("Draft");

        let view = input.render();
        assert_eq!(view.element_id, "user-input");
        assert_eq!(view.title, "Draft");
        assert!(view.people.is_empty());
    }
}
