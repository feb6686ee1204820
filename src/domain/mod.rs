pub mod board;
pub mod project;
pub mod validation;

pub use board::{BoardConfig, FormRules, ListColumn};
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{validate, Constraints, FieldValue, Validatable};
