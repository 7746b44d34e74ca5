//! Inline styles of the created elements.
//!
//! Layout is left to class names wherever possible. These are the few
//! properties the menus rely on to be measured and to stack the way they do.

/// An inline style, as property and value pairs.
pub type Style = &'static [(&'static str, &'static str)];

/// The inner area of the menus, laying them out in a row.
pub const INNER_AREA: Style = &[
    ("display", "flex"),
    ("align-items", "stretch"),
    ("justify-content", "center"),
];

/// Each menu, sharing the row evenly.
pub const MENU: Style = &[("flex", "1"), ("position", "relative"), ("text-align", "center")];

/// The placeholder of a menu while its real counterpart is not created yet.
pub const FAKE_MENU: Style = &[("flex", "1"), ("text-align", "center")];

/// The title of each menu.
pub const MENU_TITLE: Style = &[("cursor", "pointer"), ("margin", "0")];

/// The title of each placeholder menu.
pub const FAKE_MENU_TITLE: Style = &[("margin", "0")];

/// The container of an option.
pub const OPTION: Style = &[
    ("display", "flex"),
    ("flex-direction", "row"),
    ("flex-grow", "0"),
    ("flex-wrap", "wrap"),
];

/// Either half of a two-part option.
pub const OPTION_HALF: Style = &[("flex-grow", "1"), ("width", "50%")];

/// The container of a menu's options, floating above its title.
pub const OPTIONS: Style = &[
    ("bottom", "0"),
    ("margin-bottom", "2.1em"),
    ("position", "absolute"),
    ("width", "100%"),
];
