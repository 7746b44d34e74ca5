//! The stores behind the menus of icy_wrappr, and the rendering of their
//! options.
//!
//! Every menu is a [`MenuStore`] moving between visual states on a
//! [`Scheduler`](crate::futures::Scheduler). The [`MenusStore`] registry pairs
//! each menu with the stores of its options, and [`Renderers`] turns those
//! option stores into elements of a [`Surface`](crate::core::Surface).
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_wrappr_core as core;
pub use icy_wrappr_futures as futures;

pub mod menu;
pub mod menus;
pub mod option;
pub mod render;
pub mod style;

mod state;

pub use menu::MenuStore;
pub use menus::{MenuEntry, MenusStore};
pub use option::{ActionStore, OptionStore, OptionsListStore, SaveableStore};
pub use render::Renderers;
