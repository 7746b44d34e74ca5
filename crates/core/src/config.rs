//! The declarative settings of a wrapping display.
//!
//! Everything here can be written by hand in a RON file when the `serde`
//! feature is enabled:
//!
//! ```ron
//! (
//!     default_size: (width: Pixels(490.0), height: Pixels(350.0)),
//!     sizes: {
//!         "Wide": (width: Fill, height: Pixels(350.0)),
//!         "Full Screen": (width: Fill, height: Fill, full: true),
//!     },
//!     transition_time: (secs: 0, nanos: 350000000),
//!     open_policy: Exclusive,
//! )
//! ```
use crate::class_names::ClassNames;
use crate::size::{RelativeSize, SizeSummary};
use crate::time::Duration;

use std::collections::BTreeMap;

/// Whether several menus may be open at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenPolicy {
    /// Menus open and close independently.
    #[default]
    Multiple,
    /// Opening a menu closes every other unpinned menu.
    Exclusive,
}

/// The declarative settings of a wrapping display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Class names to use for display elements.
    pub class_names: ClassNames,
    /// The size the contents are created with.
    pub default_size: RelativeSize,
    /// Sizes the contents can be switched to, by name.
    pub sizes: BTreeMap<String, SizeSummary>,
    /// How long menus take to transition between visual states.
    pub transition_time: Duration,
    /// How long to wait between gamepad polls while the game is paused.
    pub paused_device_poll_time: Duration,
    /// Whether several menus may be open at the same time.
    pub open_policy: OpenPolicy,
}

impl Config {
    /// The default time menus take to transition between visual states.
    pub const DEFAULT_TRANSITION_TIME: Duration = Duration::from_millis(350);

    /// The default time between gamepad polls while the game is paused.
    pub const DEFAULT_PAUSED_DEVICE_POLL_TIME: Duration = Duration::from_millis(117);

    /// Sets the default size.
    #[must_use]
    pub fn default_size(mut self, size: RelativeSize) -> Self {
        self.default_size = size;
        self
    }

    /// Adds a named size.
    #[must_use]
    pub fn size(mut self, name: impl Into<String>, size: SizeSummary) -> Self {
        let _ = self.sizes.insert(name.into(), size);
        self
    }

    /// Sets the transition time of menus.
    #[must_use]
    pub fn transition_time(mut self, transition_time: Duration) -> Self {
        self.transition_time = transition_time;
        self
    }

    /// Sets the gamepad poll time while paused.
    #[must_use]
    pub fn paused_device_poll_time(mut self, poll_time: Duration) -> Self {
        self.paused_device_poll_time = poll_time;
        self
    }

    /// Sets the [`OpenPolicy`] of menus.
    #[must_use]
    pub fn open_policy(mut self, open_policy: OpenPolicy) -> Self {
        self.open_policy = open_policy;
        self
    }

    /// Sets the [`ClassNames`].
    #[must_use]
    pub fn class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_names: ClassNames::default(),
            default_size: RelativeSize::FILL,
            sizes: BTreeMap::new(),
            transition_time: Self::DEFAULT_TRANSITION_TIME,
            paused_device_poll_time: Self::DEFAULT_PAUSED_DEVICE_POLL_TIME,
            open_policy: OpenPolicy::default(),
        }
    }
}

#[cfg(feature = "serde")]
mod loader {
    use super::Config;
    use crate::{Error, Result};

    use std::path::Path;

    impl Config {
        /// Parses a [`Config`] from RON text.
        pub fn from_ron(content: &str) -> Result<Self> {
            ron::from_str(content).map_err(|error| Error::Config(error.to_string()))
        }

        /// Loads a [`Config`] from a `.ron` file.
        pub fn load(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();

            if !path.exists() {
                return Err(Error::Config(format!(
                    "file not found: {}",
                    path.display()
                )));
            }

            match path.extension().and_then(|extension| extension.to_str()) {
                Some("ron") => {}
                extension => {
                    return Err(Error::Config(format!(
                        "unsupported format: {}",
                        extension.unwrap_or("")
                    )));
                }
            }

            let content = std::fs::read_to_string(path)
                .map_err(|error| Error::Config(format!("{}: {error}", path.display())))?;

            log::info!("Loaded configuration from {}", path.display());

            Self::from_ron(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Dimension;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.transition_time, Duration::from_millis(350));
        assert_eq!(config.open_policy, OpenPolicy::Multiple);
        assert_eq!(config.default_size, RelativeSize::FILL);
        assert!(config.sizes.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .size("Full", SizeSummary::new(Dimension::Fill, Dimension::Fill).full(true))
            .open_policy(OpenPolicy::Exclusive);

        assert!(config.sizes["Full"].full);
        assert_eq!(config.open_policy, OpenPolicy::Exclusive);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron() {
        let config = Config::from_ron(
            r#"(
                default_size: (width: Pixels(490.0), height: Percent(50.0)),
                sizes: {
                    "Wide": (width: Fill, height: Pixels(350.0)),
                    "Full": (width: Fill, height: Fill, full: true),
                },
                open_policy: Exclusive,
            )"#,
        )
        .expect("valid configuration");

        assert_eq!(
            config.default_size,
            RelativeSize::new(Dimension::Pixels(490.0), Dimension::Percent(50.0))
        );
        assert!(!config.sizes["Wide"].full);
        assert!(config.sizes["Full"].full);
        assert_eq!(config.transition_time, Config::DEFAULT_TRANSITION_TIME);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_rejects_other_formats() {
        let path = std::env::temp_dir().join(format!(
            "icy_wrappr_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "").expect("temporary directory is writable");

        let result = Config::load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
