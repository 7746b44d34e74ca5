//! Persist option values in a string key-value store.
use crate::Result;

use rustc_hash::FxHashMap;
use std::cell::RefCell;

/// Separates the menu title from the option title in storage keys.
pub const KEY_SEPARATOR: &str = "::";

/// Returns the storage key of an option within a menu.
///
/// ```
/// use icy_wrappr_core::storage;
///
/// assert_eq!(storage::key("Options", "Volume"), "Options::Volume");
/// ```
pub fn key(menu_title: &str, option_title: &str) -> String {
    format!("{menu_title}{KEY_SEPARATOR}{option_title}")
}

/// A host-provided key-value store, like a browser's local storage.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// A [`Storage`] living in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<FxHashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty [`MemoryStorage`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`MemoryStorage`] holding the given values.
    pub fn with_values<K: Into<String>, V: Into<String>>(
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            values: RefCell::new(
                values
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Returns how many values are stored.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Returns whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _ = self
            .values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}

/// A [`Storage`] persisted to a RON file on every change.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub struct FileStorage {
    path: std::path::PathBuf,
    values: RefCell<std::collections::BTreeMap<String, String>>,
}

#[cfg(feature = "serde")]
impl FileStorage {
    /// Opens the storage file at `path`.
    ///
    /// A missing file is treated as an empty storage and created on the
    /// first write.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        use crate::Error;

        let path = path.into();

        let values: std::collections::BTreeMap<String, String> =
            match std::fs::read_to_string(&path) {
                Ok(content) => ron::from_str(&content)
                    .map_err(|error| Error::Storage(format!("{}: {error}", path.display())))?,
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                    std::collections::BTreeMap::new()
                }
                Err(error) => {
                    return Err(Error::Storage(format!("{}: {error}", path.display())));
                }
            };

        Ok(Self {
            path,
            values: RefCell::new(values),
        })
    }

    fn flush(&self) -> Result<()> {
        use crate::Error;

        let content =
            ron::ser::to_string_pretty(&*self.values.borrow(), ron::ser::PrettyConfig::default())
                .map_err(|error| Error::Storage(error.to_string()))?;

        std::fs::write(&self.path, content)
            .map_err(|error| Error::Storage(format!("{}: {error}", self.path.display())))
    }
}

#[cfg(feature = "serde")]
impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _ = self
            .values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());

        self.flush()
    }
}
