//! The wrapped application, as seen by its chrome.
use crate::core::time::Duration;

/// A handle to the wrapped game.
///
/// Hosts implement this for whatever runs their game loop. The handle is
/// given to the [`UserWrappr`](crate::UserWrappr) directly; nothing is looked
/// up from global state.
pub trait Game {
    /// Returns whether the game is paused.
    fn is_paused(&self) -> bool;

    /// Pauses the game.
    fn pause(&self);

    /// Resumes the game.
    fn play(&self);

    /// Returns the time between two frames at normal speed.
    fn interval(&self) -> Duration;

    /// Returns the speed multiplier of the game.
    fn speed(&self) -> f64;

    /// Checks connected gamepads for input.
    fn run_gamepad(&self);
}

/// The full-screen capability of the host.
pub trait FullScreen {
    /// Asks the host to show the display in full screen.
    fn request_full_screen(&self);

    /// Asks the host to leave full screen.
    fn cancel_full_screen(&self);
}
