//! Render option stores as surface elements.
//!
//! [`Renderers`] is a dispatch table keyed by [`OptionType`]. Every entry
//! creates the element of an option and wires its interaction back into the
//! option store. Hosts may replace entries or add their own.
use crate::core::surface::{ElementOptions, Event, Surface};
use crate::core::{ClassNames, Error, OptionType, Result, Value};
use crate::option::{OptionStore, SaveableStore};
use crate::style;

use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Creates the element of an option.
pub type Render<S> =
    Rc<dyn Fn(&Rc<S>, &ClassNames, &OptionStore) -> Result<<S as Surface>::Element>>;

/// A dispatch table of option renderers.
pub struct Renderers<S: Surface> {
    table: FxHashMap<OptionType, Render<S>>,
}

impl<S: Surface + 'static> Renderers<S> {
    /// Creates a table with no renderers.
    pub fn empty() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    /// Sets the renderer of an [`OptionType`], replacing any previous one.
    #[must_use]
    pub fn with(
        mut self,
        option_type: OptionType,
        render: impl Fn(&Rc<S>, &ClassNames, &OptionStore) -> Result<S::Element> + 'static,
    ) -> Self {
        let _ = self.table.insert(option_type, Rc::new(render));
        self
    }

    /// Returns whether an [`OptionType`] has a renderer.
    pub fn contains(&self, option_type: OptionType) -> bool {
        self.table.contains_key(&option_type)
    }

    /// Creates the element of an option.
    ///
    /// Fails with [`Error::UnknownOptionType`] if its type has no renderer.
    pub fn render(
        &self,
        surface: &Rc<S>,
        class_names: &ClassNames,
        option: &OptionStore,
    ) -> Result<S::Element> {
        let option_type = option.option_type();

        let render = self
            .table
            .get(&option_type)
            .ok_or_else(|| Error::UnknownOptionType(option_type.name().to_owned()))?;

        render(surface, class_names, option)
    }
}

impl<S: Surface + 'static> Default for Renderers<S> {
    fn default() -> Self {
        Self::empty()
            .with(OptionType::Action, action::<S>)
            .with(OptionType::Boolean, boolean::<S>)
            .with(OptionType::Number, number::<S>)
            .with(OptionType::Select, select::<S>)
            .with(OptionType::MultiSelect, multi_select::<S>)
            .with(OptionType::String, string::<S>)
    }
}

impl<S: Surface> Clone for Renderers<S> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<S: Surface> fmt::Debug for Renderers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.keys()).finish()
    }
}

// ============================================================================
// Built-in renderers
// ============================================================================

/// Renders an action as a single clickable element.
pub fn action<S: Surface + 'static>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    option: &OptionStore,
) -> Result<S::Element> {
    let OptionStore::Action(store) = option else {
        return Err(mismatch(option));
    };

    let element = surface.create_element(
        "div",
        ElementOptions::new()
            .class_name(&class_names.option)
            .styles(style::OPTION)
            .text(store.title()),
    );

    let store = store.clone();
    surface.on_event(
        &element,
        Rc::new(move |event: &Event| {
            if *event == Event::Click {
                store.activate();
            }
        }),
    );

    Ok(element)
}

/// Renders a boolean as a button toggling between `on` and `off`.
pub fn boolean<S: Surface + 'static>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    option: &OptionStore,
) -> Result<S::Element> {
    let store = saveable(option)?;

    let button = surface.create_element(
        "button",
        ElementOptions::new()
            .class_name(&class_names.option_right)
            .styles(style::OPTION_HALF)
            .text(on_off(&store.value())),
    );

    let weak = Rc::downgrade(surface);
    let target = button.clone();
    let toggled = store.clone();
    surface.on_event(
        &button,
        Rc::new(move |event: &Event| {
            if *event != Event::Click {
                return;
            }

            let value = Value::Boolean(toggled.value().as_bool() != Some(true));

            update(&weak, &target, &toggled, value, on_off);
        }),
    );

    Ok(two_part(surface, class_names, store.title(), button))
}

/// Renders a number as an input.
///
/// Input that is not a number is ignored.
pub fn number<S: Surface + 'static>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    option: &OptionStore,
) -> Result<S::Element> {
    let store = saveable(option)?;
    let input = text_input(surface, class_names, "input", store);

    on_input(surface, &input, store, |raw| {
        raw.trim().parse().ok().map(Value::Number)
    });

    Ok(two_part(surface, class_names, store.title(), input))
}

/// Renders a select as a single choice among its presets.
pub fn select<S: Surface + 'static>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    option: &OptionStore,
) -> Result<S::Element> {
    let store = saveable(option)?;
    let input = text_input(surface, class_names, "select", store);

    on_input(surface, &input, store, |raw| Some(Value::String(raw.to_owned())));

    Ok(two_part(surface, class_names, store.title(), input))
}

/// Renders a multi-select as one choice per selection.
pub fn multi_select<S: Surface + 'static>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    option: &OptionStore,
) -> Result<S::Element> {
    let store = saveable(option)?;
    let value = store.value();
    let choices = value.as_strings().unwrap_or_default();

    let selects: Vec<_> = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let select =
                surface.create_element("select", ElementOptions::new().text(choice.as_str()));

            let weak = Rc::downgrade(surface);
            let target = select.clone();
            let store = store.clone();
            surface.on_event(
                &select,
                Rc::new(move |event: &Event| {
                    let Event::Input(raw) = event else {
                        return;
                    };

                    let mut choices = store.value().as_strings().unwrap_or_default().to_vec();
                    let Some(choice) = choices.get_mut(index) else {
                        return;
                    };
                    choice.clone_from(raw);

                    update(&weak, &target, &store, Value::Strings(choices), |value| {
                        value
                            .as_strings()
                            .and_then(|choices| choices.get(index))
                            .cloned()
                            .unwrap_or_default()
                    });
                }),
            );

            select
        })
        .collect();

    let right = surface.create_element(
        "div",
        ElementOptions::new()
            .class_name(&class_names.option_right)
            .styles(style::OPTION_HALF)
            .children(selects),
    );

    Ok(two_part(surface, class_names, store.title(), right))
}

/// Renders a string as an input.
pub fn string<S: Surface + 'static>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    option: &OptionStore,
) -> Result<S::Element> {
    let store = saveable(option)?;
    let input = text_input(surface, class_names, "input", store);

    on_input(surface, &input, store, |raw| Some(Value::String(raw.to_owned())));

    Ok(two_part(surface, class_names, store.title(), input))
}

fn saveable(option: &OptionStore) -> Result<&SaveableStore> {
    match option {
        OptionStore::Saveable(store) => Ok(store),
        OptionStore::Action(_) => Err(mismatch(option)),
    }
}

fn mismatch(option: &OptionStore) -> Error {
    Error::UnknownOptionType(option.option_type().name().to_owned())
}

fn on_off(value: &Value) -> String {
    if value.as_bool() == Some(true) {
        "on".to_owned()
    } else {
        "off".to_owned()
    }
}

fn two_part<S: Surface>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    title: &str,
    right: S::Element,
) -> S::Element {
    let left = surface.create_element(
        "div",
        ElementOptions::new()
            .class_name(&class_names.option_left)
            .styles(style::OPTION_HALF)
            .text(title),
    );

    surface.create_element(
        "div",
        ElementOptions::new()
            .class_name(&class_names.option)
            .styles(style::OPTION)
            .child(left)
            .child(right),
    )
}

fn text_input<S: Surface>(
    surface: &Rc<S>,
    class_names: &ClassNames,
    tag: &str,
    store: &SaveableStore,
) -> S::Element {
    surface.create_element(
        tag,
        ElementOptions::new()
            .class_name(&class_names.option_right)
            .styles(style::OPTION_HALF)
            .text(store.value().to_string()),
    )
}

fn on_input<S: Surface + 'static>(
    surface: &Rc<S>,
    element: &S::Element,
    store: &SaveableStore,
    parse: impl Fn(&str) -> Option<Value> + 'static,
) {
    let weak = Rc::downgrade(surface);
    let target = element.clone();
    let store = store.clone();

    surface.on_event(
        element,
        Rc::new(move |event: &Event| {
            let Event::Input(raw) = event else {
                return;
            };

            match parse(raw) {
                Some(value) => update(&weak, &target, &store, value, Value::to_string),
                None => log::warn!("ignoring input {raw:?} for option {:?}", store.key()),
            }
        }),
    );
}

fn update<S: Surface>(
    surface: &Weak<S>,
    element: &S::Element,
    store: &SaveableStore,
    value: Value,
    show: impl Fn(&Value) -> String,
) {
    match store.set_value(value) {
        Ok(stored) => {
            if let Some(surface) = surface.upgrade() {
                surface.set_text_content(element, &show(&stored));
            }
        }
        Err(error) => log::warn!("{error}"),
    }
}
