use std::{cell::RefCell, rc::Rc};

pub mod project_store;
pub mod snapshot;

pub use project_store::ProjectStore;
pub use snapshot::Snapshot;

/// Subscriber callback, invoked with a full snapshot after every mutation
pub type Listener = Box<dyn FnMut(&Snapshot)>;

/// Store handle injected into the form and the lists.
///
/// Listeners run while the store is mutably borrowed, so they must not
/// borrow the store themselves.
pub type SharedStore = Rc<RefCell<ProjectStore>>;
