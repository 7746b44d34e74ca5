//! icy_wrappr wraps a game with sizing chrome and menus.
//!
//! A [`UserWrappr`] shares a container between the game contents and a strip
//! of menus. Each menu opens, closes and pins through timed visual states, and
//! lists options whose values are persisted to a [`Storage`]. Contents can be
//! switched between configured sizes, full screen included.
//!
//! Nothing here draws anything. Hosts implement [`Surface`] for whatever they
//! render with, hand a [`Scheduler`] to drive timers, and a [`Game`] handle to
//! pause, resume and poll gamepads with. The [`headless`] surface and the
//! virtual [`Clock`] make the whole display drivable from tests.
//!
//! # Configuration
//! The declarative settings of a display live in a [`Config`]. With the
//! `serde` feature enabled, it can be loaded from a RON file:
//!
//! ```no_run
//! # #[cfg(feature = "serde")]
//! # fn load() -> icy_wrappr::Result<()> {
//! let config = icy_wrappr::Config::load("wrappr.ron")?;
//! # let _ = config;
//! # Ok(())
//! # }
//! ```
//!
//! # Schedulers
//! [`Clock`] only advances when told to, which makes it a good fit for tests
//! and headless hosts. The `tokio` feature adds
//! `futures::backend::tokio::Scheduler`, running timers on a `tokio`
//! `LocalSet`.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_wrappr_core as core;
pub use icy_wrappr_futures as futures;
pub use icy_wrappr_shell as shell;
pub use icy_wrappr_widget as widget;

pub use crate::core::{
    ClassNames, Config, Dimension, Error, MenuSchema, OpenPolicy, OptionSchema, OptionType,
    RelativeSize, Result, Size, SizeSummary, Storage, Surface, Value, VisualState,
};
pub use crate::futures::{Clock, Scheduler};
pub use crate::shell::{
    Areas, Dependencies, Display, FullScreen, Game, SizeRequest, UserWrappr, Visibility,
};
pub use crate::widget::{MenuStore, MenusStore, Renderers};

pub mod headless {
    //! Run displays without rendering them.
    pub use crate::shell::headless::{Document, Measure, Node};
}

pub mod storage {
    //! Persist option values.
    pub use crate::core::storage::{KEY_SEPARATOR, MemoryStorage, Storage, key};

    #[cfg(feature = "serde")]
    pub use crate::core::storage::FileStorage;
}

pub mod time {
    //! Keep track of time, both in native and web platforms!
    pub use crate::core::time::*;
}
