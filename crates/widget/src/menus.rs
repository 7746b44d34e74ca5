//! The registry of every menu shown around the contents.
use crate::core::time::Duration;
use crate::core::{Config, MenuSchema, OpenPolicy, Result, Storage, VisualState};
use crate::futures::Scheduler;
use crate::menu::MenuStore;
use crate::option::OptionsListStore;

use std::fmt;
use std::rc::Rc;

/// A registered menu: its visual state and its options.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// The visual state of the menu.
    pub menu: MenuStore,
    /// The options listed within the menu.
    pub options: OptionsListStore,
}

/// The menus shown around the contents, in order.
///
/// Cloning a [`MenusStore`] shares the menus themselves.
#[derive(Clone)]
pub struct MenusStore {
    entries: Vec<MenuEntry>,
    scheduler: Rc<dyn Scheduler>,
    storage: Rc<dyn Storage>,
    transition_time: Duration,
    open_policy: OpenPolicy,
}

impl MenusStore {
    /// Creates an empty [`MenusStore`] following the menu settings of
    /// `config`.
    pub fn new(config: &Config, scheduler: Rc<dyn Scheduler>, storage: Rc<dyn Storage>) -> Self {
        Self {
            entries: Vec::new(),
            scheduler,
            storage,
            transition_time: config.transition_time,
            open_policy: config.open_policy,
        }
    }

    /// Registers some menus, each starting closed.
    ///
    /// Menus keep the order they are given in. Nothing is registered if any
    /// option has an unknown type. Returns the new entries.
    pub fn register(
        &mut self,
        schemas: impl IntoIterator<Item = MenuSchema>,
    ) -> Result<&[MenuEntry]> {
        let entries = schemas
            .into_iter()
            .map(|schema| {
                let options =
                    OptionsListStore::new(&schema.title, schema.options, Rc::clone(&self.storage))?;

                Ok(MenuEntry {
                    menu: MenuStore::new(
                        schema.title,
                        Rc::clone(&self.scheduler),
                        self.transition_time,
                    ),
                    options,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let start = self.entries.len();
        self.entries.extend(entries);

        log::debug!("registered {} menus", self.entries.len() - start);

        Ok(&self.entries[start..])
    }

    /// Returns the registered menus, in order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Returns the menu at `index`.
    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Returns the first menu with the given title.
    pub fn find(&self, title: &str) -> Option<&MenuEntry> {
        self.entries
            .iter()
            .find(|entry| entry.menu.title() == title)
    }

    /// Returns the titles of the menus, in order.
    pub fn titles(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.menu.title()).collect()
    }

    /// Returns how many menus are registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no menus are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the [`OpenPolicy`] of the menus.
    pub fn open_policy(&self) -> OpenPolicy {
        self.open_policy
    }

    /// Opens the menu at `index`.
    ///
    /// With [`OpenPolicy::Exclusive`], every other menu that is not pinned
    /// starts closing. Returns whether the menu started opening.
    pub fn open(&self, index: usize) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };

        let opened = entry.menu.open();

        if opened && self.open_policy == OpenPolicy::Exclusive {
            let _ = self.close(Some(index));
        }

        opened
    }

    /// Toggles the menu at `index` open or closed, following the
    /// [`OpenPolicy`].
    ///
    /// Returns whether the menu changed.
    pub fn toggle_open(&self, index: usize) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };

        let opening = entry.menu.visual_state() == VisualState::Closed;
        let toggled = entry.menu.toggle_open();

        if toggled && opening && self.open_policy == OpenPolicy::Exclusive {
            let _ = self.close(Some(index));
        }

        toggled
    }

    /// Starts closing every open or opening menu that is not pinned, except
    /// the one at `except`.
    ///
    /// Returns how many menus started closing.
    pub fn close(&self, except: Option<usize>) -> usize {
        self.entries
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != except)
            .filter(|(_, entry)| entry.menu.close())
            .count()
    }
}

impl fmt::Debug for MenusStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenusStore")
            .field("entries", &self.entries)
            .field("transition_time", &self.transition_time)
            .field("open_policy", &self.open_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::option::OptionSchema;
    use crate::core::storage::MemoryStorage;
    use crate::core::Error;
    use crate::futures::Clock;

    fn menus(policy: OpenPolicy) -> (Rc<Clock>, MenusStore) {
        let clock = Rc::new(Clock::new());
        let mut menus = MenusStore::new(
            &Config::default().open_policy(policy),
            clock.clone(),
            Rc::new(MemoryStorage::new()),
        );

        let _ = menus
            .register([
                MenuSchema::new("Options").option(OptionSchema::boolean("Mute", || false)),
                MenuSchema::new("Info"),
                MenuSchema::new("Help"),
            ])
            .expect("known option types");

        (clock, menus)
    }

    fn states(menus: &MenusStore) -> Vec<VisualState> {
        menus
            .entries()
            .iter()
            .map(|entry| entry.menu.visual_state())
            .collect()
    }

    #[test]
    fn register_keeps_order_and_starts_closed() {
        let (_clock, menus) = menus(OpenPolicy::Multiple);

        assert_eq!(menus.titles(), ["Options", "Info", "Help"]);
        assert_eq!(states(&menus), [VisualState::Closed; 3]);
        assert_eq!(menus.entries()[0].options.len(), 1);
        assert!(menus.find("Info").is_some_and(|entry| entry.options.is_empty()));
    }

    #[test]
    fn register_is_all_or_nothing() {
        let (_clock, mut menus) = menus(OpenPolicy::Multiple);

        let result = menus.register([
            MenuSchema::new("Extra"),
            MenuSchema::new("Broken").option(OptionSchema::unknown("Screenshot", "screenshot")),
        ]);

        assert_eq!(
            result.err(),
            Some(Error::UnknownOptionType("screenshot".to_owned()))
        );
        assert_eq!(menus.len(), 3);
    }

    #[test]
    fn multiple_menus_may_be_open() {
        let (clock, menus) = menus(OpenPolicy::Multiple);

        assert!(menus.toggle_open(0));
        assert!(menus.toggle_open(1));
        let _ = clock.tick(Config::DEFAULT_TRANSITION_TIME);

        assert_eq!(
            states(&menus),
            [VisualState::Open, VisualState::Open, VisualState::Closed]
        );
    }

    #[test]
    fn exclusive_menus_close_each_other_but_not_pinned_ones() {
        let (clock, menus) = menus(OpenPolicy::Exclusive);

        assert!(menus.toggle_open(0));
        let _ = clock.tick(Config::DEFAULT_TRANSITION_TIME);
        assert!(menus.entries()[0].menu.toggle_pinned());

        assert!(menus.toggle_open(1));
        let _ = clock.tick(Config::DEFAULT_TRANSITION_TIME);

        assert!(menus.open(2));
        assert_eq!(
            states(&menus),
            [
                VisualState::PinnedOpen,
                VisualState::Closing,
                VisualState::Opening
            ]
        );

        let _ = clock.tick(Config::DEFAULT_TRANSITION_TIME);
        assert_eq!(
            states(&menus),
            [
                VisualState::PinnedOpen,
                VisualState::Closed,
                VisualState::Open
            ]
        );
    }

    #[test]
    fn close_skips_the_excepted_menu() {
        let (clock, menus) = menus(OpenPolicy::Multiple);

        assert!(menus.open(0));
        assert!(menus.open(1));
        let _ = clock.tick(Config::DEFAULT_TRANSITION_TIME);

        assert_eq!(menus.close(Some(1)), 1);
        assert_eq!(menus.close(None), 1);
        assert_eq!(menus.close(None), 0);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let (_clock, menus) = menus(OpenPolicy::Exclusive);

        assert!(!menus.toggle_open(7));
        assert!(!menus.open(7));
    }
}
