//! Poll gamepads at the pace of the game.
use crate::core::time::{self, Duration};
use crate::futures::{Scheduler, TimerId};
use crate::game::Game;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Polls gamepads on a schedule following the game speed.
///
/// While the game runs, gamepads are polled once per frame. While it is
/// paused, they are polled every `paused_poll_time`, so unpausing through a
/// gamepad still works.
///
/// Cloning a [`GamepadPoller`] returns a handle to the same polling.
#[derive(Clone)]
pub struct GamepadPoller {
    game: Rc<dyn Game>,
    scheduler: Rc<dyn Scheduler>,
    paused_poll_time: Duration,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl GamepadPoller {
    /// Creates a new idle [`GamepadPoller`].
    pub fn new(
        game: Rc<dyn Game>,
        scheduler: Rc<dyn Scheduler>,
        paused_poll_time: Duration,
    ) -> Self {
        Self {
            game,
            scheduler,
            paused_poll_time,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Returns whether a poll is scheduled.
    pub fn is_polling(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Schedules the next poll, then polls the gamepads.
    ///
    /// Calling this while already polling restarts the schedule instead of
    /// adding another one.
    pub fn poll_devices(&self) {
        let delay = self.next_delay();
        let poller = self.clone();

        let next = self
            .scheduler
            .set_timeout(Box::new(move || poller.poll_devices()), delay);

        if let Some(previous) = self.pending.replace(Some(next)) {
            let _ = self.scheduler.clear_timeout(previous);
        }

        log::debug!("polling gamepads again in {delay:?}");

        self.game.run_gamepad();
    }

    /// Stops polling. Returns whether a poll was scheduled.
    pub fn stop(&self) -> bool {
        match self.pending.take() {
            Some(pending) => self.scheduler.clear_timeout(pending),
            None => false,
        }
    }

    fn next_delay(&self) -> Duration {
        if self.game.is_paused() {
            return self.paused_poll_time;
        }

        let speed = self.game.speed();

        if !speed.is_finite() || speed <= 0.0 {
            log::warn!("game speed {speed} cannot pace gamepad polls, using the paused poll time");

            return self.paused_poll_time;
        }

        let delay = time::milliseconds(self.game.interval().as_secs_f64() * 1000.0 / speed);

        if delay.is_zero() {
            log::warn!("game interval is empty, using the paused poll time for gamepad polls");

            return self.paused_poll_time;
        }

        delay
    }
}

impl fmt::Debug for GamepadPoller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamepadPoller")
            .field("paused_poll_time", &self.paused_poll_time)
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}
