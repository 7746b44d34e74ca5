//! Bind the menu stores to elements of a surface.
use crate::core::surface::{ElementOptions, Event, Surface};
use crate::core::{ClassNames, Result};
use crate::widget::menu::ListenerId;
use crate::widget::render::Renderers;
use crate::widget::{MenuStore, MenusStore, style};

use std::fmt;
use std::rc::Rc;

/// The rendered menus, kept in sync with their stores.
///
/// Each menu element carries the class of its current visual state. Clicking
/// a title toggles its menu open, and secondary clicking it toggles the pin.
///
/// Dropping the view stops updating its elements.
pub struct MenuView<S: Surface> {
    element: S::Element,
    subscriptions: Vec<(MenuStore, ListenerId)>,
}

impl<S: Surface + 'static> MenuView<S> {
    /// Renders every menu of `menus` into a new menu area.
    ///
    /// Fails if an option has no renderer.
    pub fn new(
        surface: &Rc<S>,
        class_names: &ClassNames,
        menus: &MenusStore,
        renderers: &Renderers<S>,
    ) -> Result<Self> {
        let mut subscriptions = Vec::with_capacity(menus.len());
        let mut elements = Vec::with_capacity(menus.len());

        for (index, entry) in menus.entries().iter().enumerate() {
            let options = entry
                .options
                .options()
                .iter()
                .map(|option| renderers.render(surface, class_names, option))
                .collect::<Result<Vec<_>>>()?;

            let options_list = surface.create_element(
                "div",
                ElementOptions::new()
                    .class_name(&class_names.options_list)
                    .children(options),
            );

            let children = surface.create_element(
                "div",
                ElementOptions::new()
                    .class_name(&class_names.menu_children)
                    .child(surface.create_element(
                        "div",
                        ElementOptions::new()
                            .class_name(&class_names.options)
                            .styles(style::OPTIONS)
                            .child(options_list),
                    )),
            );

            let title = surface.create_element(
                "h4",
                ElementOptions::new()
                    .class_name(&class_names.menu_title)
                    .styles(style::MENU_TITLE)
                    .text(entry.menu.title()),
            );

            let element = surface.create_element(
                "div",
                ElementOptions::new()
                    .class_name(class_names.menu_in(entry.menu.visual_state()))
                    .styles(style::MENU)
                    .child(children)
                    .child(title.clone()),
            );

            let registry = menus.clone();
            surface.on_event(
                &title,
                Rc::new(move |event: &Event| match event {
                    Event::Click => {
                        let _ = registry.toggle_open(index);
                    }
                    Event::SecondaryClick => {
                        if let Some(entry) = registry.get(index) {
                            let _ = entry.menu.toggle_pinned();
                        }
                    }
                    Event::Input(_) => {}
                }),
            );

            let weak = Rc::downgrade(surface);
            let target = element.clone();
            let menu_class_names = class_names.clone();
            let listener = entry.menu.subscribe(move |state| {
                if let Some(surface) = weak.upgrade() {
                    surface.set_class_name(&target, &menu_class_names.menu_in(state));
                }
            });

            subscriptions.push((entry.menu.clone(), listener));
            elements.push(element);
        }

        let inner_area = surface.create_element(
            "div",
            ElementOptions::new()
                .class_name(&class_names.inner_area)
                .styles(style::INNER_AREA)
                .children(elements),
        );

        let element = surface.create_element(
            "div",
            ElementOptions::new()
                .class_name(&class_names.outer_area)
                .child(inner_area),
        );

        Ok(Self {
            element,
            subscriptions,
        })
    }
}

impl<S: Surface> MenuView<S> {
    /// Returns the menu area holding the rendered menus.
    pub fn element(&self) -> &S::Element {
        &self.element
    }
}

impl<S: Surface> Drop for MenuView<S> {
    fn drop(&mut self) {
        for (menu, listener) in self.subscriptions.drain(..) {
            let _ = menu.unsubscribe(listener);
        }
    }
}

impl<S: Surface> fmt::Debug for MenuView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuView")
            .field("element", &self.element)
            .field("menus", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::option::OptionSchema;
    use crate::core::storage::MemoryStorage;
    use crate::core::{Config, Error, MenuSchema, OptionType, VisualState};
    use crate::futures::Clock;
    use crate::headless::Document;

    fn menus(schemas: Vec<MenuSchema>) -> (Rc<Clock>, MenusStore) {
        let clock = Rc::new(Clock::new());
        let mut menus = MenusStore::new(
            &Config::default(),
            clock.clone(),
            Rc::new(MemoryStorage::new()),
        );

        let _ = menus.register(schemas).expect("known option types");

        (clock, menus)
    }

    #[test]
    fn menu_classes_follow_the_visual_state() {
        let document = Rc::new(Document::new());
        let class_names = ClassNames::default();
        let (clock, menus) = menus(vec![MenuSchema::new("Options"), MenuSchema::new("Help")]);

        let view = MenuView::new(&document, &class_names, &menus, &Renderers::default())
            .expect("every option renders");
        document.append_child(&document.root(), view.element());

        let titles = document.find_by_class("menu-title");
        let help = document.find_by_class("menu")[1];

        document.click(titles[1]);
        assert_eq!(document.class_name(help).as_deref(), Some("menu menu-opening"));

        let _ = clock.tick(Config::DEFAULT_TRANSITION_TIME);
        assert_eq!(document.class_name(help).as_deref(), Some("menu menu-open"));

        document.secondary_click(titles[1]);
        assert_eq!(menus.entries()[1].menu.visual_state(), VisualState::PinnedOpen);
        assert_eq!(document.class_name(help).as_deref(), Some("menu menu-pinned-open"));
    }

    #[test]
    fn options_are_rendered_inside_their_menu() {
        let document = Rc::new(Document::new());
        let class_names = ClassNames::default();
        let (_clock, menus) = menus(vec![
            MenuSchema::new("Options")
                .option(OptionSchema::boolean("Mute", || false))
                .option(OptionSchema::action("Reset", || {})),
        ]);

        let view = MenuView::new(&document, &class_names, &menus, &Renderers::default())
            .expect("every option renders");
        document.append_child(&document.root(), view.element());

        let list = document
            .first_by_class("options-list")
            .expect("options are listed");

        assert_eq!(document.children(list).len(), 2);
        assert_eq!(document.text_content(list), "MuteoffReset");
    }

    #[test]
    fn missing_renderers_are_fatal() {
        let document = Rc::new(Document::new());
        let (_clock, menus) = menus(vec![
            MenuSchema::new("Options").option(OptionSchema::number("Speed", || 1.0)),
        ]);

        let renderers: Renderers<Document> = Renderers::default();
        let without_numbers =
            Renderers::empty().with(OptionType::Boolean, move |surface, class_names, option| {
                renderers.render(surface, class_names, option)
            });

        let error = MenuView::new(&document, &ClassNames::default(), &menus, &without_numbers)
            .expect_err("numbers have no renderer");

        assert_eq!(error, Error::UnknownOptionType("number".to_owned()));
    }

    #[test]
    fn dropped_views_stop_listening() {
        let document = Rc::new(Document::new());
        let class_names = ClassNames::default();
        let (_clock, menus) = menus(vec![MenuSchema::new("Options")]);

        let view = MenuView::new(&document, &class_names, &menus, &Renderers::default())
            .expect("every option renders");
        let menu = document.children(document.children(*view.element())[0])[0];

        drop(view);
        assert!(menus.entries()[0].menu.open());

        assert_eq!(document.class_name(menu).as_deref(), Some("menu menu-closed"));
    }
}
