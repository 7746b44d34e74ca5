//! Pause the game while nobody can see it.
use crate::game::Game;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Whether the display can be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The display is shown.
    Visible,
    /// The display is hidden, like in a background tab.
    Hidden,
}

/// Pauses the game when the display is hidden, and resumes it when shown.
///
/// Games paused by something else stay paused.
pub struct VisibilityToggler {
    game: Rc<dyn Game>,
    paused_while_hidden: Cell<bool>,
}

impl VisibilityToggler {
    /// Creates a new [`VisibilityToggler`].
    pub fn new(game: Rc<dyn Game>) -> Self {
        Self {
            game,
            paused_while_hidden: Cell::new(false),
        }
    }

    /// Reacts to a change of [`Visibility`].
    ///
    /// Returns whether the game was paused or resumed.
    pub fn toggle(&self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Hidden => {
                if self.game.is_paused() {
                    return false;
                }

                log::info!("pausing while hidden");
                self.paused_while_hidden.set(true);
                self.game.pause();

                true
            }
            Visibility::Visible => {
                if !self.paused_while_hidden.replace(false) || !self.game.is_paused() {
                    return false;
                }

                log::info!("resuming after being hidden");
                self.game.play();

                true
            }
        }
    }
}

impl fmt::Debug for VisibilityToggler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityToggler")
            .field("paused_while_hidden", &self.paused_while_hidden.get())
            .finish_non_exhaustive()
    }
}
