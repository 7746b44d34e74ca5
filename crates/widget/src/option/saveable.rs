//! Options whose value is saved.
use crate::core::option::{OptionKind, OptionSchema};
use crate::core::storage::{self, Storage};
use crate::core::{Error, Result, Value, ValueKind};
use crate::state::RcWrapper;

use std::fmt;
use std::rc::Rc;

/// The store of an option holding a [`Value`].
///
/// The value survives reloads through the host [`Storage`], under the key
/// `<menu title>::<option title>`.
#[derive(Clone)]
pub struct SaveableStore {
    schema: OptionSchema,
    kind: ValueKind,
    key: String,
    value: RcWrapper<Value>,
    storage: Rc<dyn Storage>,
}

impl SaveableStore {
    /// Creates the store of a saveable option within the menu titled
    /// `menu_title`.
    ///
    /// The initial value is read from `storage` when present, and otherwise
    /// asked from the schema.
    pub fn new(menu_title: &str, schema: OptionSchema, storage: Rc<dyn Storage>) -> Result<Self> {
        let (Some(saveable), Some(kind)) = (schema.saveable(), schema.value_kind()) else {
            return Err(Error::UnknownOptionType(schema.type_name().to_owned()));
        };

        let key = storage::key(menu_title, &schema.title);

        let stored = storage.get(&key).and_then(|raw| {
            let value = Value::parse(kind, &raw).and_then(|value| validate(&schema, value).ok());

            if value.is_none() {
                log::warn!("ignoring stored value {raw:?} of option {key:?}: not {kind}");
            }

            value
        });

        let value = match stored {
            Some(value) => value,
            None => saveable.initial_value(),
        };

        Ok(Self {
            schema,
            kind,
            key,
            value: RcWrapper::new(value),
            storage,
        })
    }

    /// Returns the title of the option.
    pub fn title(&self) -> &str {
        &self.schema.title
    }

    /// Returns the storage key of the option.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the schema of the option.
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    /// Returns the kind of value the option holds.
    pub fn value_kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the current value.
    pub fn value(&self) -> Value {
        self.value.with_data(Clone::clone)
    }

    /// Replaces the current value.
    ///
    /// Numbers are clamped into the range of the option. The value is
    /// persisted before the schema is notified with the new and old values.
    /// Returns the value that was stored.
    pub fn set_value(&self, value: Value) -> Result<Value> {
        let value = validate(&self.schema, value)?;

        self.storage.set(&self.key, &value.to_storage_string())?;

        let old = self
            .value
            .with_data_mut(|current| std::mem::replace(current, value.clone()));

        log::debug!("option {:?}: {old} -> {value}", self.key);

        if let Some(saveable) = self.schema.saveable() {
            saveable.save(&value, &old);
        }

        Ok(value)
    }
}

fn validate(schema: &OptionSchema, value: Value) -> Result<Value> {
    let invalid = |expected: ValueKind, found: String| Error::InvalidValue {
        option: schema.title.clone(),
        expected,
        found,
    };

    match (&schema.kind, value) {
        (OptionKind::Boolean(_), value @ Value::Boolean(_)) => Ok(value),
        (OptionKind::Number { min, max, .. }, Value::Number(number)) => {
            if !number.is_finite() {
                return Err(invalid(ValueKind::Number, number.to_string()));
            }

            let number = min.map_or(number, |min| number.max(min));
            let number = max.map_or(number, |max| number.min(max));

            Ok(Value::Number(number))
        }
        (OptionKind::Select { options, .. }, Value::String(choice)) => {
            if options.contains(&choice) {
                Ok(Value::String(choice))
            } else {
                Err(invalid(
                    ValueKind::String,
                    format!("{choice:?}, which is not one of {options:?}"),
                ))
            }
        }
        (
            OptionKind::MultiSelect {
                options,
                selections,
                ..
            },
            Value::Strings(choices),
        ) => {
            if choices.len() != *selections {
                return Err(invalid(
                    ValueKind::Strings,
                    format!("{} selections instead of {selections}", choices.len()),
                ));
            }

            if let Some(choice) = choices.iter().find(|choice| !options.contains(choice)) {
                return Err(invalid(
                    ValueKind::Strings,
                    format!("{choice:?}, which is not one of {options:?}"),
                ));
            }

            Ok(Value::Strings(choices))
        }
        (OptionKind::String { .. }, value @ Value::String(_)) => Ok(value),
        (_, value) => match schema.value_kind() {
            Some(expected) => Err(invalid(expected, format!("{} ({value})", value.kind()))),
            None => Err(Error::UnknownOptionType(schema.type_name().to_owned())),
        },
    }
}

impl fmt::Debug for SaveableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveableStore")
            .field("key", &self.key)
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}
