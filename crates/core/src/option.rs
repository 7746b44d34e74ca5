//! Schemas of the options listed within a menu.
use crate::value::{Value, ValueKind};

use std::fmt;
use std::rc::Rc;

/// The type tag of an [`OptionSchema`].
///
/// Stores and renderers are dispatched on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A simple triggerable action.
    Action,
    /// A boolean toggle.
    Boolean,
    /// A number, optionally within a range.
    Number,
    /// One of some preset values.
    Select,
    /// A fixed amount of preset values.
    MultiSelect,
    /// Any string value.
    String,
    /// An unknown or unsupported type.
    Unknown,
}

impl OptionType {
    /// Returns the name of the type, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            OptionType::Action => "action",
            OptionType::Boolean => "boolean",
            OptionType::Number => "number",
            OptionType::Select => "select",
            OptionType::MultiSelect => "multi-select",
            OptionType::String => "string",
            OptionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value callbacks of an option whose value is saved.
#[derive(Clone)]
pub struct Saveable {
    initial_value: Rc<dyn Fn() -> Value>,
    save_value: Rc<dyn Fn(&Value, &Value)>,
}

impl Saveable {
    /// Creates a new [`Saveable`] with the given initial value provider.
    pub fn new(initial_value: impl Fn() -> Value + 'static) -> Self {
        Self {
            initial_value: Rc::new(initial_value),
            save_value: Rc::new(|_: &Value, _: &Value| {}),
        }
    }

    /// Returns the initial value of the option.
    pub fn initial_value(&self) -> Value {
        (self.initial_value)()
    }

    /// Notifies the option owner of a new value.
    pub fn save(&self, new: &Value, old: &Value) {
        (self.save_value)(new, old);
    }
}

impl fmt::Debug for Saveable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Saveable").finish_non_exhaustive()
    }
}

/// The type-specific part of an [`OptionSchema`].
#[derive(Clone)]
pub enum OptionKind {
    /// Calls an action when activated.
    Action(Rc<dyn Fn()>),
    /// Stores a boolean.
    Boolean(Saveable),
    /// Stores a number.
    Number {
        /// The value callbacks.
        value: Saveable,
        /// The minimum value, if any.
        min: Option<f64>,
        /// The maximum value, if any.
        max: Option<f64>,
    },
    /// Stores one of the given preset values.
    Select {
        /// The value callbacks.
        value: Saveable,
        /// The preset values.
        options: Vec<String>,
    },
    /// Stores `selections` of the given preset values.
    MultiSelect {
        /// The value callbacks.
        value: Saveable,
        /// The preset values.
        options: Vec<String>,
        /// How many values are selected at once.
        selections: usize,
    },
    /// Stores any string.
    String {
        /// The value callbacks.
        value: Saveable,
        /// Suggestions for the value.
        suggestions: Vec<String>,
    },
    /// A type the host did not recognize, by name.
    Unknown(String),
}

impl fmt::Debug for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Action(_) => f.write_str("Action"),
            OptionKind::Boolean(_) => f.write_str("Boolean"),
            OptionKind::Number { min, max, .. } => f
                .debug_struct("Number")
                .field("min", min)
                .field("max", max)
                .finish(),
            OptionKind::Select { options, .. } => {
                f.debug_struct("Select").field("options", options).finish()
            }
            OptionKind::MultiSelect {
                options,
                selections,
                ..
            } => f
                .debug_struct("MultiSelect")
                .field("options", options)
                .field("selections", selections)
                .finish(),
            OptionKind::String { suggestions, .. } => f
                .debug_struct("String")
                .field("suggestions", suggestions)
                .finish(),
            OptionKind::Unknown(name) => f.debug_tuple("Unknown").field(name).finish(),
        }
    }
}

/// An individual option within a menu.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    /// The displayed title of the option.
    pub title: String,
    /// The type-specific part of the option.
    pub kind: OptionKind,
}

impl OptionSchema {
    /// Creates an option that calls `action` when activated.
    pub fn action(title: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::Action(Rc::new(action)),
        }
    }

    /// Creates an option that stores a boolean.
    pub fn boolean(title: impl Into<String>, initial: impl Fn() -> bool + 'static) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::Boolean(Saveable::new(move || Value::Boolean(initial()))),
        }
    }

    /// Creates an option that stores a number.
    pub fn number(title: impl Into<String>, initial: impl Fn() -> f64 + 'static) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::Number {
                value: Saveable::new(move || Value::Number(initial())),
                min: None,
                max: None,
            },
        }
    }

    /// Creates an option that stores one of the given `options`.
    pub fn select(
        title: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        initial: impl Fn() -> String + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::Select {
                value: Saveable::new(move || Value::String(initial())),
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Creates an option that stores `selections` of the given `options`.
    pub fn multi_select(
        title: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        selections: usize,
        initial: impl Fn() -> Vec<String> + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::MultiSelect {
                value: Saveable::new(move || Value::Strings(initial())),
                options: options.into_iter().map(Into::into).collect(),
                selections,
            },
        }
    }

    /// Creates an option that stores any string.
    pub fn string(title: impl Into<String>, initial: impl Fn() -> String + 'static) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::String {
                value: Saveable::new(move || Value::String(initial())),
                suggestions: Vec::new(),
            },
        }
    }

    /// Creates an option of a type the host does not know how to handle.
    pub fn unknown(title: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: OptionKind::Unknown(type_name.into()),
        }
    }

    /// Sets the callback notified with `(new, old)` whenever a saveable
    /// option changes value.
    ///
    /// Has no effect on actions and unknown options.
    #[must_use]
    pub fn on_save(mut self, save_value: impl Fn(&Value, &Value) + 'static) -> Self {
        if let Some(saveable) = self.saveable_mut() {
            saveable.save_value = Rc::new(save_value);
        }
        self
    }

    /// Sets the minimum of a number option.
    #[must_use]
    pub fn min(mut self, minimum: f64) -> Self {
        if let OptionKind::Number { min, .. } = &mut self.kind {
            *min = Some(minimum);
        }
        self
    }

    /// Sets the maximum of a number option.
    #[must_use]
    pub fn max(mut self, maximum: f64) -> Self {
        if let OptionKind::Number { max, .. } = &mut self.kind {
            *max = Some(maximum);
        }
        self
    }

    /// Sets the suggestions of a string option.
    #[must_use]
    pub fn suggestions(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        if let OptionKind::String { suggestions, .. } = &mut self.kind {
            *suggestions = values.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Returns the [`OptionType`] tag of the schema.
    pub fn option_type(&self) -> OptionType {
        match &self.kind {
            OptionKind::Action(_) => OptionType::Action,
            OptionKind::Boolean(_) => OptionType::Boolean,
            OptionKind::Number { .. } => OptionType::Number,
            OptionKind::Select { .. } => OptionType::Select,
            OptionKind::MultiSelect { .. } => OptionType::MultiSelect,
            OptionKind::String { .. } => OptionType::String,
            OptionKind::Unknown(_) => OptionType::Unknown,
        }
    }

    /// Returns the name of the schema's type.
    ///
    /// Unknown schemas report the name they were created with.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            OptionKind::Unknown(name) => name,
            _ => self.option_type().name(),
        }
    }

    /// Returns the value callbacks, if the option is saveable.
    pub fn saveable(&self) -> Option<&Saveable> {
        match &self.kind {
            OptionKind::Boolean(value)
            | OptionKind::Number { value, .. }
            | OptionKind::Select { value, .. }
            | OptionKind::MultiSelect { value, .. }
            | OptionKind::String { value, .. } => Some(value),
            OptionKind::Action(_) | OptionKind::Unknown(_) => None,
        }
    }

    fn saveable_mut(&mut self) -> Option<&mut Saveable> {
        match &mut self.kind {
            OptionKind::Boolean(value)
            | OptionKind::Number { value, .. }
            | OptionKind::Select { value, .. }
            | OptionKind::MultiSelect { value, .. }
            | OptionKind::String { value, .. } => Some(value),
            OptionKind::Action(_) | OptionKind::Unknown(_) => None,
        }
    }

    /// Returns the kind of value stored by the option, if saveable.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match &self.kind {
            OptionKind::Boolean(_) => Some(ValueKind::Boolean),
            OptionKind::Number { .. } => Some(ValueKind::Number),
            OptionKind::Select { .. } | OptionKind::String { .. } => Some(ValueKind::String),
            OptionKind::MultiSelect { .. } => Some(ValueKind::Strings),
            OptionKind::Action(_) | OptionKind::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    #[test]
    fn builders_only_touch_matching_kinds() {
        let number = OptionSchema::number("Speed", || 1.0).min(0.5).max(4.0);
        let string = OptionSchema::string("Name", String::new).min(0.5);

        assert!(matches!(
            number.kind,
            OptionKind::Number {
                min: Some(0.5),
                max: Some(4.0),
                ..
            }
        ));
        assert_eq!(string.option_type(), OptionType::String);
    }

    #[test]
    fn on_save_replaces_the_callback() {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&saved);

        let schema = OptionSchema::boolean("Mute", || false)
            .on_save(move |new, old| log.borrow_mut().push((new.clone(), old.clone())));

        schema
            .saveable()
            .expect("boolean options are saveable")
            .save(&Value::Boolean(true), &Value::Boolean(false));

        assert_eq!(
            *saved.borrow(),
            vec![(Value::Boolean(true), Value::Boolean(false))]
        );
    }

    #[test]
    fn unknown_schemas_keep_their_type_name() {
        let schema = OptionSchema::unknown("Screenshot", "screenshot");

        assert_eq!(schema.option_type(), OptionType::Unknown);
        assert_eq!(schema.type_name(), "screenshot");
        assert!(schema.saveable().is_none());
    }
}
