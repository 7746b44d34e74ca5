//! Class names given to the created elements.
use crate::visual_state::VisualState;

/// Class names to use for display elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// The area surrounding the menus.
    pub outer_area: String,
    /// The area directly containing the menus.
    pub inner_area: String,
    /// Added to the inner area while it only holds placeholder titles.
    pub inner_area_fake: String,
    /// Each menu.
    pub menu: String,
    /// The children container of each menu.
    pub menu_children: String,
    /// The title of each menu.
    pub menu_title: String,
    /// The container of each option.
    pub option: String,
    /// The left half of a two-part option.
    pub option_left: String,
    /// The right half of a two-part option.
    pub option_right: String,
    /// The container of each menu's options.
    pub options: String,
    /// The list of options within its container.
    pub options_list: String,
}

impl ClassNames {
    /// Returns the class of a menu in the given [`VisualState`].
    ///
    /// ```
    /// use icy_wrappr_core::{ClassNames, VisualState};
    ///
    /// let class_names = ClassNames::default();
    ///
    /// assert_eq!(class_names.menu_in(VisualState::PinnedOpen), "menu menu-pinned-open");
    /// ```
    pub fn menu_in(&self, state: VisualState) -> String {
        format!("{menu} {menu}-{}", state.class_suffix(), menu = self.menu)
    }

    /// Returns the class of the inner area while it holds placeholder titles.
    pub fn fake_inner_area(&self) -> String {
        format!("{} {}", self.inner_area, self.inner_area_fake)
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            outer_area: "menus-outer-area".to_owned(),
            inner_area: "menus-inner-area".to_owned(),
            inner_area_fake: "menus-inner-area-fake".to_owned(),
            menu: "menu".to_owned(),
            menu_children: "menu-children".to_owned(),
            menu_title: "menu-title".to_owned(),
            option: "option".to_owned(),
            option_left: "option-left".to_owned(),
            option_right: "option-right".to_owned(),
            options: "options".to_owned(),
            options_list: "options-list".to_owned(),
        }
    }
}
