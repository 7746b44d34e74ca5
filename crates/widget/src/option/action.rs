//! Options that trigger an action.
use std::fmt;
use std::rc::Rc;

/// The store of an action option.
#[derive(Clone)]
pub struct ActionStore {
    title: String,
    action: Rc<dyn Fn()>,
}

impl ActionStore {
    /// Creates a new [`ActionStore`].
    pub fn new(title: impl Into<String>, action: Rc<dyn Fn()>) -> Self {
        Self {
            title: title.into(),
            action,
        }
    }

    /// Returns the title of the option.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Calls the action.
    pub fn activate(&self) {
        log::debug!("activating option {:?}", self.title);
        (self.action)();
    }
}

impl fmt::Debug for ActionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionStore")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
