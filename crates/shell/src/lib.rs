//! Displays, menus and device glue for icy_wrappr.
//!
//! A [`UserWrappr`] sits between a host and a game. It shares a container
//! between the game contents and a strip of menus, switches the contents
//! between configured sizes, pauses the game while hidden, and keeps
//! gamepads polled while the game is paused.
//!
//! Hosts provide a [`Surface`](crate::core::Surface) to draw on. The
//! [`headless`] surface keeps everything in memory, which is enough to
//! drive and inspect a display in tests.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_wrappr_core as core;
pub use icy_wrappr_futures as futures;
pub use icy_wrappr_widget as widget;

pub mod display;
pub mod game;
pub mod gamepad;
pub mod headless;
pub mod negotiator;
pub mod size_changer;
pub mod view;
pub mod visibility;

mod wrappr;

pub use display::{Areas, CreateContents, Display};
pub use game::{FullScreen, Game};
pub use gamepad::GamepadPoller;
pub use headless::Document;
pub use negotiator::{Negotiated, SizeNegotiator};
pub use size_changer::{SizeChanger, SizeRequest};
pub use view::MenuView;
pub use visibility::{Visibility, VisibilityToggler};
pub use wrappr::{Dependencies, UserWrappr};
