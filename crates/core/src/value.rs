//! Values held by saveable options.
use std::fmt;

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A `true` or `false` toggle.
    Boolean,
    /// A number.
    Number,
    /// A single string.
    String,
    /// A fixed amount of strings.
    Strings,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Boolean => "a boolean",
            ValueKind::Number => "a number",
            ValueKind::String => "a string",
            ValueKind::Strings => "a list of strings",
        })
    }
}

/// The value of a saveable option.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A `true` or `false` toggle.
    Boolean(bool),
    /// A number.
    Number(f64),
    /// A single string.
    String(String),
    /// A fixed amount of strings.
    Strings(Vec<String>),
}

/// Ends every list entry in its storage representation.
///
/// Entries escape their own terminators and backslashes, so lists keep
/// empty entries and entries spanning several lines.
const STRINGS_TERMINATOR: char = '\n';

impl Value {
    /// Returns the [`ValueKind`] of the value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Strings(_) => ValueKind::Strings,
        }
    }

    /// Returns the boolean, if the value is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number, if the value is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string, if the value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the strings, if the value is a list.
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Value::Strings(values) => Some(values),
            _ => None,
        }
    }

    /// Encodes the value for a string key-value storage.
    pub fn to_storage_string(&self) -> String {
        match self {
            Value::Boolean(value) => value.to_string(),
            Value::Number(value) => value.to_string(),
            Value::String(value) => value.clone(),
            Value::Strings(values) => values.iter().fold(String::new(), |mut stored, value| {
                for c in value.chars() {
                    match c {
                        '\\' => stored.push_str("\\\\"),
                        STRINGS_TERMINATOR => stored.push_str("\\n"),
                        _ => stored.push(c),
                    }
                }

                stored.push(STRINGS_TERMINATOR);
                stored
            }),
        }
    }

    /// Decodes a stored string as a value of the given kind.
    ///
    /// Booleans are only `true` when the stored text is `true`, ignoring case.
    pub fn parse(kind: ValueKind, raw: &str) -> Option<Value> {
        match kind {
            ValueKind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Some(Value::Boolean(true)),
                "false" => Some(Value::Boolean(false)),
                _ => None,
            },
            ValueKind::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(Value::Number),
            ValueKind::String => Some(Value::String(raw.to_owned())),
            ValueKind::Strings => {
                if raw.is_empty() {
                    return Some(Value::Strings(Vec::new()));
                }

                let entries = raw.strip_suffix(STRINGS_TERMINATOR).unwrap_or(raw);

                Some(Value::Strings(
                    entries.split(STRINGS_TERMINATOR).map(unescape).collect(),
                ))
            }
        }
    }
}

fn unescape(entry: &str) -> String {
    let mut unescaped = String::with_capacity(entry.len());
    let mut chars = entry.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => unescaped.push(STRINGS_TERMINATOR),
            Some(escaped) => unescaped.push(escaped),
            None => unescaped.push(c),
        }
    }

    unescaped
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Strings(values) => write!(f, "[{}]", values.join(", ")),
            _ => f.write_str(&self.to_storage_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::Strings(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_ignore_case() {
        assert_eq!(
            Value::parse(ValueKind::Boolean, "TRUE"),
            Some(Value::Boolean(true))
        );
        assert_eq!(
            Value::parse(ValueKind::Boolean, "false"),
            Some(Value::Boolean(false))
        );
        assert_eq!(Value::parse(ValueKind::Boolean, "yes"), None);
    }

    #[test]
    fn numbers_must_be_finite() {
        assert_eq!(
            Value::parse(ValueKind::Number, "2.5"),
            Some(Value::Number(2.5))
        );
        assert_eq!(Value::parse(ValueKind::Number, "NaN"), None);
        assert_eq!(Value::parse(ValueKind::Number, "fast"), None);
    }

    #[test]
    fn strings_survive_storage() {
        let value = Value::Strings(vec!["Up".to_owned(), "W".to_owned()]);
        let stored = value.to_storage_string();

        assert_eq!(Value::parse(ValueKind::Strings, &stored), Some(value));
    }

    #[test]
    fn string_lists_keep_empty_and_multiline_entries() {
        for values in [
            vec![],
            vec![String::new()],
            vec!["Up".to_owned(), String::new()],
            vec!["two\nlines".to_owned(), "back\\slash".to_owned(), "\\n".to_owned()],
        ] {
            let value = Value::Strings(values);
            let stored = value.to_storage_string();

            assert_eq!(Value::parse(ValueKind::Strings, &stored), Some(value));
        }
    }
}
