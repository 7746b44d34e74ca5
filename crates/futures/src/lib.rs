//! Timers and schedulers for icy_wrappr.
//!
//! Everything in icy_wrappr runs on a single thread, driven by an event loop.
//! Work that has to happen later, like finishing a menu transition or polling
//! a gamepad again, is handed to a [`Scheduler`].
//!
//! Two schedulers are provided:
//!
//! - [`Clock`], a virtual clock that only advances when told to. It makes
//!   timing deterministic in tests and in headless hosts.
//! - `backend::tokio::Scheduler`, which runs callbacks on a `tokio`
//!   [`LocalSet`] (requires the `tokio` feature).
//!
//! [`LocalSet`]: https://docs.rs/tokio/latest/tokio/task/struct.LocalSet.html
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use futures;
pub use icy_wrappr_core as core;

pub mod backend;
pub mod clock;
pub mod scheduler;

pub use clock::Clock;
pub use scheduler::{Callback, Scheduler, TimerId};
