//! The core library of [icy_wrappr].
//!
//! This library holds the basic types that the rest of the workspace builds on:
//! sizes and size schemas, menu and option schemas, the visual states of a menu,
//! and the seams to the host environment ([`Surface`] for creating and measuring
//! elements, [`Storage`] for persisting option values).
//!
//! It does not depend on any host environment. Browser, native or headless hosts
//! plug in by implementing the traits found here.
//!
//! [icy_wrappr]: https://github.com/iced-rs/iced
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod class_names;
pub mod config;
pub mod menu;
pub mod option;
pub mod size;
pub mod storage;
pub mod surface;
pub mod time;
pub mod value;
pub mod visual_state;

mod error;

pub use class_names::ClassNames;
pub use config::{Config, OpenPolicy};
pub use error::{Error, Result};
pub use menu::MenuSchema;
pub use option::{OptionKind, OptionSchema, OptionType};
pub use size::{Dimension, RelativeSize, Size, SizeSummary};
pub use storage::Storage;
pub use surface::{ElementOptions, Surface};
pub use value::{Value, ValueKind};
pub use visual_state::VisualState;
