//! The visual state of a single menu.
//!
//! A [`MenuStore`] moves between the [`VisualState`]s of a menu. Opening and
//! closing pass through a transitional state that a timer completes after the
//! transition time. Starting a new transition invalidates the timer of the
//! previous one, so a late timer can never bring back a state the user has
//! already left.
use crate::core::time::Duration;
use crate::core::VisualState;
use crate::futures::{Scheduler, TimerId};
use crate::state::{RcWrapper, WeakWrapper};

use slotmap::{SlotMap, new_key_type};
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// Identifies a listener of a [`MenuStore`].
    pub struct ListenerId;
}

/// A listener of [`VisualState`] changes.
pub type Listener = Rc<dyn Fn(VisualState)>;

/// The visual state of a menu.
///
/// Cloning a [`MenuStore`] returns a handle to the same menu.
#[derive(Clone)]
pub struct MenuStore {
    inner: RcWrapper<Inner>,
    scheduler: Rc<dyn Scheduler>,
}

struct Inner {
    title: String,
    state: VisualState,
    transition_time: Duration,
    generation: u64,
    pending: Option<TimerId>,
    listeners: SlotMap<ListenerId, Listener>,
}

impl MenuStore {
    /// Creates a new closed [`MenuStore`].
    pub fn new(
        title: impl Into<String>,
        scheduler: Rc<dyn Scheduler>,
        transition_time: Duration,
    ) -> Self {
        Self {
            inner: RcWrapper::new(Inner {
                title: title.into(),
                state: VisualState::Closed,
                transition_time,
                generation: 0,
                pending: None,
                listeners: SlotMap::with_key(),
            }),
            scheduler,
        }
    }

    /// Returns the title of the menu.
    pub fn title(&self) -> String {
        self.inner.with_data(|inner| inner.title.clone())
    }

    /// Returns the current [`VisualState`] of the menu.
    pub fn visual_state(&self) -> VisualState {
        self.inner.with_data(|inner| inner.state)
    }

    /// Returns whether the menu is pinned open.
    pub fn is_pinned(&self) -> bool {
        self.visual_state().is_pinned()
    }

    /// Returns how long transitions take.
    pub fn transition_time(&self) -> Duration {
        self.inner.with_data(|inner| inner.transition_time)
    }

    /// Starts opening the menu.
    ///
    /// Valid from [`VisualState::Closed`], and from [`VisualState::Closing`]
    /// where it reverses the transition. Returns whether the menu started
    /// opening.
    pub fn open(&self) -> bool {
        match self.visual_state() {
            VisualState::Closed | VisualState::Closing => {
                self.transition(VisualState::Opening, VisualState::Open);
                true
            }
            _ => false,
        }
    }

    /// Starts closing the menu.
    ///
    /// Valid from [`VisualState::Open`], and from [`VisualState::Opening`]
    /// where it reverses the transition. A pinned menu must be unpinned
    /// first. Returns whether the menu started closing.
    pub fn close(&self) -> bool {
        match self.visual_state() {
            VisualState::Open | VisualState::Opening => {
                self.transition(VisualState::Closing, VisualState::Closed);
                true
            }
            _ => false,
        }
    }

    /// Opens a closed menu, or closes an open one.
    ///
    /// A pinned menu is unpinned and closed. Does nothing while the menu is
    /// transitioning.
    pub fn toggle_open(&self) -> bool {
        match self.visual_state() {
            VisualState::Closed => self.open(),
            VisualState::Open | VisualState::PinnedOpen => {
                self.transition(VisualState::Closing, VisualState::Closed);
                true
            }
            VisualState::Opening | VisualState::Closing => false,
        }
    }

    /// Pins an open menu, or unpins a pinned one.
    ///
    /// Returns whether the state changed.
    pub fn toggle_pinned(&self) -> bool {
        let next = match self.visual_state() {
            VisualState::Open => VisualState::PinnedOpen,
            VisualState::PinnedOpen => VisualState::Open,
            _ => return false,
        };

        set_state(&self.inner, next);
        true
    }

    /// Calls `listener` whenever the [`VisualState`] changes.
    pub fn subscribe(&self, listener: impl Fn(VisualState) + 'static) -> ListenerId {
        self.inner
            .with_data_mut(|inner| inner.listeners.insert(Rc::new(listener)))
    }

    /// Stops calling a listener. Returns whether it was subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner
            .with_data_mut(|inner| inner.listeners.remove(id).is_some())
    }

    fn transition(&self, through: VisualState, to: VisualState) {
        let (generation, superseded, transition_time) = self.inner.with_data_mut(|inner| {
            inner.generation += 1;
            (inner.generation, inner.pending.take(), inner.transition_time)
        });

        if let Some(timer) = superseded {
            let _ = self.scheduler.clear_timeout(timer);
        }

        set_state(&self.inner, through);

        let menu = self.inner.downgrade();
        let timer = self.scheduler.set_timeout(
            Box::new(move || complete(&menu, generation, to)),
            transition_time,
        );

        self.inner.with_data_mut(|inner| {
            if inner.generation == generation {
                inner.pending = Some(timer);
            }
        });
    }
}

fn complete(menu: &WeakWrapper<Inner>, generation: u64, to: VisualState) {
    let Some(menu) = menu.upgrade() else {
        return;
    };

    let current = menu.with_data_mut(|inner| {
        if inner.generation != generation {
            log::debug!(
                "menu {:?}: ignoring superseded transition to {to}",
                inner.title
            );
            return false;
        }

        inner.pending = None;
        true
    });

    if current {
        set_state(&menu, to);
    }
}

fn set_state(menu: &RcWrapper<Inner>, state: VisualState) {
    let listeners = menu.with_data_mut(|inner| {
        if inner.state == state {
            return Vec::new();
        }

        log::debug!("menu {:?}: {} -> {state}", inner.title, inner.state);
        inner.state = state;

        inner.listeners.values().cloned().collect()
    });

    for listener in listeners {
        listener(state);
    }
}

impl fmt::Debug for MenuStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.with_data(|inner| {
            f.debug_struct("MenuStore")
                .field("title", &inner.title)
                .field("state", &inner.state)
                .field("listeners", &inner.listeners.len())
                .finish_non_exhaustive()
        })
    }
}
