//! How a menu visually behaves.
use std::fmt;

/// The visual state of a menu.
///
/// `Opening` and `Closing` are transitional: they resolve to `Open` and
/// `Closed` once the transition time has elapsed, unless something changes
/// the state first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// The menu is not open.
    #[default]
    Closed,
    /// The menu is on its way to being open.
    Opening,
    /// The menu is fully open.
    Open,
    /// The menu is on its way to being closed.
    Closing,
    /// The menu is locked into being fully open.
    PinnedOpen,
}

impl VisualState {
    /// All the visual states.
    pub const ALL: [VisualState; 5] = [
        VisualState::Closed,
        VisualState::Opening,
        VisualState::Open,
        VisualState::Closing,
        VisualState::PinnedOpen,
    ];

    /// Returns whether the state is `Open` or `PinnedOpen`.
    pub fn is_open(self) -> bool {
        matches!(self, VisualState::Open | VisualState::PinnedOpen)
    }

    /// Returns whether the state is `Closed`.
    pub fn is_closed(self) -> bool {
        self == VisualState::Closed
    }

    /// Returns whether the state is `Opening` or `Closing`.
    pub fn is_transitioning(self) -> bool {
        matches!(self, VisualState::Opening | VisualState::Closing)
    }

    /// Returns whether the state is `PinnedOpen`.
    pub fn is_pinned(self) -> bool {
        self == VisualState::PinnedOpen
    }

    /// Returns the suffix used to build state class names.
    pub fn class_suffix(self) -> &'static str {
        match self {
            VisualState::Closed => "closed",
            VisualState::Opening => "opening",
            VisualState::Open => "open",
            VisualState::Closing => "closing",
            VisualState::PinnedOpen => "pinned-open",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
