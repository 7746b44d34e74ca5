//! Stores of the options listed within a menu.
mod action;
mod saveable;

pub use action::ActionStore;
pub use saveable::SaveableStore;

use crate::core::option::{OptionKind, OptionSchema, OptionType};
use crate::core::{Result, Storage};

use std::rc::Rc;

/// The store of an option, by type.
#[derive(Debug, Clone)]
pub enum OptionStore {
    /// An option that triggers an action.
    Action(ActionStore),
    /// An option holding a saved value.
    Saveable(SaveableStore),
}

impl OptionStore {
    /// Creates the store of an option within the menu titled `menu_title`.
    ///
    /// Fails with [`Error::UnknownOptionType`](crate::core::Error::UnknownOptionType)
    /// for options of an unknown type.
    pub fn new(menu_title: &str, schema: OptionSchema, storage: Rc<dyn Storage>) -> Result<Self> {
        if let OptionKind::Action(action) = &schema.kind {
            return Ok(OptionStore::Action(ActionStore::new(
                schema.title.clone(),
                Rc::clone(action),
            )));
        }

        SaveableStore::new(menu_title, schema, storage).map(OptionStore::Saveable)
    }

    /// Returns the title of the option.
    pub fn title(&self) -> &str {
        match self {
            OptionStore::Action(action) => action.title(),
            OptionStore::Saveable(saveable) => saveable.title(),
        }
    }

    /// Returns the [`OptionType`] of the option.
    pub fn option_type(&self) -> OptionType {
        match self {
            OptionStore::Action(_) => OptionType::Action,
            OptionStore::Saveable(saveable) => saveable.schema().option_type(),
        }
    }
}

/// The stores of every option listed within a menu, in order.
#[derive(Debug, Clone, Default)]
pub struct OptionsListStore {
    options: Vec<OptionStore>,
}

impl OptionsListStore {
    /// Creates one store per schema, in order.
    ///
    /// Fails on the first option of an unknown type.
    pub fn new(
        menu_title: &str,
        schemas: impl IntoIterator<Item = OptionSchema>,
        storage: Rc<dyn Storage>,
    ) -> Result<Self> {
        let options = schemas
            .into_iter()
            .map(|schema| OptionStore::new(menu_title, schema, Rc::clone(&storage)))
            .collect::<Result<_>>()?;

        Ok(Self { options })
    }

    /// Returns the option stores, in order.
    pub fn options(&self) -> &[OptionStore] {
        &self.options
    }

    /// Returns the store of the option with the given title.
    pub fn get(&self, title: &str) -> Option<&OptionStore> {
        self.options.iter().find(|option| option.title() == title)
    }

    /// Returns how many options are listed.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether no options are listed.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
