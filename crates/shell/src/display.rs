//! Lay out the contents and the menus within a container.
use crate::core::surface::{ElementOptions, Surface};
use crate::core::{ClassNames, RelativeSize, Size};
use crate::negotiator::SizeNegotiator;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Creates the contents of a display at the given size.
pub type CreateContents<Element> = Rc<dyn Fn(Size) -> Element>;

/// The areas of a display, once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Areas<Element> {
    /// Holds the created contents.
    pub content_area: Element,
    /// Holds the placeholder or real menus.
    pub menu_area: Element,
    /// The size the contents were created at.
    pub content_size: Size,
    /// The measured size of the menu titles.
    pub menu_area_size: Size,
}

/// Holds the contents and the menus within a container.
pub struct Display<S: Surface> {
    surface: Rc<S>,
    container: S::Element,
    class_names: ClassNames,
    create_contents: CreateContents<S::Element>,
    areas: RefCell<Option<Areas<S::Element>>>,
}

impl<S: Surface> Display<S> {
    /// Creates a new empty [`Display`] within `container`.
    pub fn new(
        surface: Rc<S>,
        container: S::Element,
        class_names: ClassNames,
        create_contents: CreateContents<S::Element>,
    ) -> Self {
        Self {
            surface,
            container,
            class_names,
            create_contents,
            areas: RefCell::new(None),
        }
    }

    /// Returns the container of the display.
    pub fn container(&self) -> &S::Element {
        &self.container
    }

    /// Returns the current areas, if contents were created.
    pub fn areas(&self) -> Option<Areas<S::Element>> {
        self.areas.borrow().clone()
    }

    /// Replaces any previous contents with new ones at the requested size.
    ///
    /// The menu area gets placeholder titles for `menu_titles`, and the
    /// contents are created at whatever size is left next to them. Sizes
    /// that turn out negative are clamped to zero.
    pub async fn reset_contents(
        &self,
        requested: RelativeSize,
        menu_titles: &[String],
    ) -> Areas<S::Element> {
        let previous = self.areas.borrow_mut().take();

        if let Some(previous) = previous {
            self.surface
                .remove_child(&self.container, &previous.content_area);
            self.surface.remove_child(&self.container, &previous.menu_area);
        }

        let available = self.surface.available_size(&self.container);
        let container_size = requested.resolve(available);

        let negotiated = SizeNegotiator::new(self.surface.as_ref(), &self.class_names)
            .compute_content_area(&self.container, container_size, menu_titles)
            .await;

        let content_size = if negotiated.content_area.is_negative() {
            log::warn!(
                "menus need {} out of {container_size}, clamping the contents from {}",
                negotiated.menu_area_size,
                negotiated.content_area
            );

            negotiated.content_area.clamped()
        } else {
            negotiated.content_area
        };

        let contents = (self.create_contents)(content_size);

        let content_area = self.surface.create_element(
            "div",
            ElementOptions::new()
                .style("height", format!("{}px", content_size.height))
                .style("position", "relative")
                .style("width", format!("{}px", content_size.width))
                .child(contents),
        );

        self.surface
            .insert_before(&self.container, &content_area, &negotiated.menu_area);

        log::info!("reset contents to {content_size} (requested {requested:?})");

        let areas = Areas {
            content_area,
            menu_area: negotiated.menu_area,
            content_size,
            menu_area_size: negotiated.menu_area_size,
        };

        *self.areas.borrow_mut() = Some(areas.clone());

        areas
    }

    /// Swaps the current menu area for `menu_area`.
    ///
    /// Returns whether there was a menu area to replace.
    pub fn replace_menu_area(&self, menu_area: S::Element) -> bool {
        let mut areas = self.areas.borrow_mut();

        let Some(areas) = areas.as_mut() else {
            return false;
        };

        self.surface
            .insert_before(&self.container, &menu_area, &areas.menu_area);
        self.surface.remove_child(&self.container, &areas.menu_area);

        areas.menu_area = menu_area;
        true
    }
}

impl<S: Surface> fmt::Debug for Display<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("container", &self.container)
            .field("areas", &self.areas.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;
    use crate::headless::{Document, Node};

    use futures::executor::block_on;

    fn display(document: &Rc<Document>) -> Display<Document> {
        let contents = Rc::clone(document);

        Display::new(
            Rc::clone(document),
            document.root(),
            ClassNames::default(),
            Rc::new(move |size: Size| {
                contents.create_element(
                    "canvas",
                    ElementOptions::new().text(format!("{}x{}", size.width, size.height)),
                )
            }),
        )
    }

    fn titles() -> Vec<String> {
        vec!["Options".to_owned(), "Help".to_owned()]
    }

    #[test]
    fn contents_come_before_the_menus() {
        let document = Rc::new(Document::new());
        document.set_available_size(document.root(), Size::new(840.0, 700.0));
        document.set_measure(|document, node: Node| {
            if document.has_class(node, "menus-inner-area") {
                Size::new(490.0, 350.0)
            } else {
                Size::ZERO
            }
        });

        let display = display(&document);
        let areas = block_on(display.reset_contents(RelativeSize::FILL, &titles()));

        assert_eq!(document.children(document.root()), [areas.content_area, areas.menu_area]);
        assert_eq!(areas.content_size, Size::new(350.0, 350.0));
        assert_eq!(document.text_content(areas.content_area), "350x350");
        assert_eq!(document.style(areas.content_area, "width").as_deref(), Some("350px"));
    }

    #[test]
    fn resetting_replaces_previous_areas() {
        let document = Rc::new(Document::new());
        document.set_available_size(document.root(), Size::new(840.0, 700.0));

        let display = display(&document);

        let first = block_on(display.reset_contents(RelativeSize::FILL, &titles()));
        let second = block_on(display.reset_contents(
            RelativeSize::new(Dimension::Percent(50.0), Dimension::Pixels(350.0)),
            &titles(),
        ));

        assert_eq!(document.parent(first.content_area), None);
        assert_eq!(document.parent(first.menu_area), None);
        assert_eq!(document.children(document.root()).len(), 2);
        assert_eq!(second.content_size, Size::new(420.0, 350.0));
    }

    #[test]
    fn negative_contents_are_clamped() {
        let document = Rc::new(Document::new());
        document.set_available_size(document.root(), Size::new(300.0, 200.0));
        document.set_measure(|_, _| Size::new(490.0, 350.0));

        let display = display(&document);
        let areas = block_on(display.reset_contents(RelativeSize::FILL, &titles()));

        assert_eq!(areas.content_size, Size::ZERO);
    }

    #[test]
    fn menu_areas_can_be_replaced() {
        let document = Rc::new(Document::new());
        let display = display(&document);

        let real = document.create_element("div", ElementOptions::new());
        assert!(!display.replace_menu_area(real));

        let areas = block_on(display.reset_contents(RelativeSize::FILL, &titles()));
        assert!(display.replace_menu_area(real));

        assert_eq!(document.children(document.root()), [areas.content_area, real]);
        assert_eq!(display.areas().map(|areas| areas.menu_area), Some(real));
    }
}
