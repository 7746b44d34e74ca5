//! A `tokio` scheduler running callbacks on the current [`LocalSet`].
//!
//! [`LocalSet`]: ::tokio::task::LocalSet
use crate::core::time::Duration;
use crate::scheduler::{self, Callback, TimerId};

use slotmap::SlotMap;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::task::AbortHandle;

/// A [`Scheduler`](scheduler::Scheduler) sleeping on `tokio` timers.
///
/// Callbacks are spawned with [`tokio::task::spawn_local`], so the scheduler
/// must be used from within a [`LocalSet`](tokio::task::LocalSet).
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Rc<RefCell<SlotMap<TimerId, AbortHandle>>>,
}

impl Scheduler {
    /// Creates a new [`Scheduler`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl scheduler::Scheduler for Scheduler {
    fn set_timeout(&self, callback: Callback, delay: Duration) -> TimerId {
        let pending = Rc::clone(&self.pending);

        self.pending.borrow_mut().insert_with_key(move |id| {
            tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;

                if pending.borrow_mut().remove(id).is_some() {
                    callback();
                }
            })
            .abort_handle()
        })
    }

    fn clear_timeout(&self, id: TimerId) -> bool {
        match self.pending.borrow_mut().remove(id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}
