//! Share the space of a container between the contents and the menus.
//!
//! Menus take up however much room their titles need once rendered, which is
//! only known after laying them out. The [`SizeNegotiator`] attaches a strip
//! of placeholder titles to the container, measures it, and gives the rest of
//! the container to the contents.
use crate::core::surface::{ElementOptions, Surface};
use crate::core::{ClassNames, Size};
use crate::widget::style;

/// The outcome of a size negotiation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Negotiated<Element> {
    /// The size left for the contents.
    ///
    /// Negative when the menus need more room than the container has.
    pub content_area: Size,
    /// The measured size of the menu titles.
    pub menu_area_size: Size,
    /// The attached menu area holding the placeholder titles.
    pub menu_area: Element,
}

/// Computes the area left for the contents of a container.
///
/// Both axes of the measured title strip are taken from the container.
#[derive(Debug)]
pub struct SizeNegotiator<'a, S> {
    surface: &'a S,
    class_names: &'a ClassNames,
}

impl<'a, S: Surface> SizeNegotiator<'a, S> {
    /// Creates a new [`SizeNegotiator`].
    pub fn new(surface: &'a S, class_names: &'a ClassNames) -> Self {
        Self {
            surface,
            class_names,
        }
    }

    /// Appends placeholder titles for `menu_titles` to `container`, and
    /// computes the area left for the contents out of `container_size`.
    ///
    /// Without menus nothing is measured and the contents get the whole
    /// container.
    pub async fn compute_content_area(
        &self,
        container: &S::Element,
        container_size: Size,
        menu_titles: &[String],
    ) -> Negotiated<S::Element> {
        let (menu_area, title_strip) = self.create_menu_area(menu_titles);

        self.surface.append_child(container, &menu_area);

        let menu_area_size = if menu_titles.is_empty() {
            Size::ZERO
        } else {
            self.surface.measure(&title_strip).await
        };

        let content_area = container_size.remaining(menu_area_size);

        log::debug!(
            "negotiated {content_area} for contents and {menu_area_size} for {} menus in {container_size}",
            menu_titles.len()
        );

        Negotiated {
            content_area,
            menu_area_size,
            menu_area,
        }
    }

    fn create_menu_area(&self, menu_titles: &[String]) -> (S::Element, S::Element) {
        let menus = menu_titles.iter().map(|title| {
            let title = self.surface.create_element(
                "h4",
                ElementOptions::new()
                    .class_name(&self.class_names.menu_title)
                    .styles(style::FAKE_MENU_TITLE)
                    .text(title.as_str()),
            );

            self.surface.create_element(
                "div",
                ElementOptions::new()
                    .class_name(&self.class_names.menu)
                    .styles(style::FAKE_MENU)
                    .child(title),
            )
        });

        let inner_area = self.surface.create_element(
            "div",
            ElementOptions::new()
                .class_name(self.class_names.fake_inner_area())
                .styles(style::INNER_AREA)
                .children(menus),
        );

        let outer_area = self.surface.create_element(
            "div",
            ElementOptions::new()
                .class_name(&self.class_names.outer_area)
                .child(inner_area.clone()),
        );

        (outer_area, inner_area)
    }
}
