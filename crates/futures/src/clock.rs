//! A virtual clock that only advances when told to.
use crate::core::time::Duration;
use crate::scheduler::{Callback, Scheduler, TimerId};

use slotmap::SlotMap;
use std::cell::RefCell;
use std::fmt;

/// How many timers [`Clock::tick`] and [`Clock::run_all`] fire before giving
/// up.
///
/// A callback rescheduling itself with no delay never leaves the current
/// instant.
pub const RUN_ALL_LIMIT: usize = 1000;

/// A [`Scheduler`] driven by hand.
///
/// Time stands still until [`Clock::tick`] is called, which then fires the
/// due callbacks in order. Callbacks scheduled while ticking fire during the
/// same tick if they fall within it.
///
/// ```
/// use icy_wrappr_futures::{Clock, Scheduler};
/// use icy_wrappr_futures::core::time::Duration;
///
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let clock = Clock::new();
/// let fired = Rc::new(Cell::new(false));
///
/// let flag = Rc::clone(&fired);
/// let _ = clock.set_timeout(Box::new(move || flag.set(true)), Duration::from_millis(350));
///
/// assert_eq!(clock.tick(Duration::from_millis(349)), 0);
/// assert!(!fired.get());
///
/// assert_eq!(clock.tick(Duration::from_millis(1)), 1);
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct Clock {
    state: RefCell<State>,
}

#[derive(Default)]
struct State {
    now: Duration,
    sequence: u64,
    timers: SlotMap<TimerId, Timer>,
}

struct Timer {
    due: Duration,
    sequence: u64,
    callback: Callback,
}

impl Clock {
    /// Creates a new [`Clock`] at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how much virtual time has elapsed.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Returns how many callbacks are pending.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Advances the clock by `duration`, firing every callback due in the
    /// meantime.
    ///
    /// Stops after [`RUN_ALL_LIMIT`] callbacks, leaving the rest for the next
    /// tick. Returns how many callbacks fired.
    pub fn tick(&self, duration: Duration) -> usize {
        let target = self.now() + duration;
        let fired = self.fire_until(Some(target));

        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);

        fired
    }

    /// Advances the clock until no callbacks are pending.
    ///
    /// Stops after [`RUN_ALL_LIMIT`] callbacks. Returns how many fired.
    pub fn run_all(&self) -> usize {
        self.fire_until(None)
    }

    fn fire_until(&self, until: Option<Duration>) -> usize {
        let mut fired = 0;

        while fired < RUN_ALL_LIMIT {
            if !self.fire_next(until) {
                return fired;
            }

            fired += 1;
        }

        log::warn!(
            "Clock stopped after {RUN_ALL_LIMIT} callbacks with {} still pending",
            self.pending()
        );

        fired
    }

    /// Fires the earliest callback due by `until`, if any.
    fn fire_next(&self, until: Option<Duration>) -> bool {
        let timer = {
            let mut state = self.state.borrow_mut();

            let next = state
                .timers
                .iter()
                .filter(|(_, timer)| until.is_none_or(|until| timer.due <= until))
                .min_by_key(|(_, timer)| (timer.due, timer.sequence))
                .map(|(id, _)| id);

            let Some(timer) = next.and_then(|id| state.timers.remove(id)) else {
                return false;
            };

            state.now = state.now.max(timer.due);
            timer
        };

        (timer.callback)();

        true
    }
}

impl Scheduler for Clock {
    fn set_timeout(&self, callback: Callback, delay: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();

        let due = state.now + delay;
        let sequence = state.sequence;
        state.sequence += 1;

        state.timers.insert(Timer {
            due,
            sequence,
            callback,
        })
    }

    fn clear_timeout(&self, id: TimerId) -> bool {
        self.state.borrow_mut().timers.remove(id).is_some()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();

        f.debug_struct("Clock")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}
