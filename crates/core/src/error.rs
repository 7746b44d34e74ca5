use crate::value::ValueKind;

/// A specialized [`Result`](std::result::Result) for icy_wrappr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by icy_wrappr.
///
/// Invalid menu transitions are never errors; they are reported through
/// boolean returns. Everything here is a configuration bug surfaced at
/// startup or first use, and nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A named size was requested but is not configured.
    #[error("Size '{0}' does not exist")]
    UnknownSize(String),

    /// An option schema has a type with no registered store or renderer.
    #[error("Unknown option type: {0}")]
    UnknownOptionType(String),

    /// A value does not fit the option it was given to.
    #[error("Invalid value for option '{option}': expected {expected}, found {found}")]
    InvalidValue {
        /// The title of the option.
        option: String,
        /// What the option accepts.
        expected: ValueKind,
        /// What it was given, described for humans.
        found: String,
    },

    /// A configuration file could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(String),

    /// A storage backend failed to persist a value.
    #[error("Failed to persist value: {0}")]
    Storage(String),
}
