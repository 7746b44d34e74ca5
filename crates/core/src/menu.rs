//! Schemas of the menus shown around the contents.
use crate::option::OptionSchema;

/// A menu to display, with the options listed inside of it.
///
/// Menus are rendered in the order they are given.
#[derive(Debug, Clone)]
pub struct MenuSchema {
    /// The title of the menu.
    pub title: String,
    /// The options within the menu.
    pub options: Vec<OptionSchema>,
}

impl MenuSchema {
    /// Creates a new [`MenuSchema`] with no options.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option to the menu.
    #[must_use]
    pub fn option(mut self, option: OptionSchema) -> Self {
        self.options.push(option);
        self
    }

    /// Adds some options to the menu.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = OptionSchema>) -> Self {
        self.options.extend(options);
        self
    }
}
