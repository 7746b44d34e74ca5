//! Schedule callbacks to run after a delay.
use crate::core::time::Duration;

use std::rc::Rc;

slotmap::new_key_type! {
    /// The identifier of a scheduled callback.
    pub struct TimerId;
}

/// A callback run once its delay has elapsed.
pub type Callback = Box<dyn FnOnce()>;

/// Runs callbacks after a delay, like a browser's `setTimeout`.
///
/// Callbacks run on the thread driving the scheduler, one at a time, and
/// never re-entrantly from [`Scheduler::set_timeout`] itself.
pub trait Scheduler {
    /// Schedules `callback` to run once `delay` has elapsed.
    fn set_timeout(&self, callback: Callback, delay: Duration) -> TimerId;

    /// Cancels a scheduled callback.
    ///
    /// Returns whether the callback was still pending.
    fn clear_timeout(&self, id: TimerId) -> bool;
}

impl<T> Scheduler for Rc<T>
where
    T: Scheduler + ?Sized,
{
    fn set_timeout(&self, callback: Callback, delay: Duration) -> TimerId {
        self.as_ref().set_timeout(callback, delay)
    }

    fn clear_timeout(&self, id: TimerId) -> bool {
        self.as_ref().clear_timeout(id)
    }
}
