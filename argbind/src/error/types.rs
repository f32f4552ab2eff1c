//! Error enums for field registration, argument parsing and scalar decoding.

use thiserror::Error;

use crate::decode::ScalarKind;

/// Misuse of the binding API detected while the binder is being built.
///
/// These errors describe programmer mistakes (a bad call shape, a clashing
/// key, a malformed tag) rather than bad user input, so callers usually
/// treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The binding targets were supplied in an invalid shape.
    #[error(transparent)]
    Targets(#[from] TargetError),

    /// A field name that is not externally settable.
    #[error("private field not allowed ({field})")]
    PrivateField {
        /// Name of the rejected field.
        field: String,
    },

    /// An explicit key that was already claimed by an earlier field.
    #[error("key already used ({key})")]
    DuplicateKey {
        /// The clashing key.
        key: String,
    },

    /// An explicit short key with more than one character.
    #[error("short key should be a single character ({key} on field {field})")]
    ShortKeyTooLong {
        /// Field carrying the offending tag.
        field: String,
        /// The key taken from the tag.
        key: String,
    },
}

/// Invalid combinations of option records and argument containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TargetError {
    /// Neither an option record nor an argument container was supplied.
    #[error("expected an option record, an argument container, or both")]
    Missing,

    /// A second option record was supplied.
    #[error("only one option record may be bound")]
    SecondRecord,

    /// A second argument container was supplied.
    #[error("only one argument container may be bound")]
    SecondContainer,

    /// The option record was supplied after the argument container.
    #[error("the option record must be supplied before the argument container")]
    RecordAfterContainer,
}

/// Invalid user input found while parsing the argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// One or more keys that no field claims.
    #[error("{}", unknown_options_message(.keys))]
    UnknownOptions {
        /// Every unclaimed key, in the order it was supplied.
        keys: Vec<String>,
    },

    /// More leftover arguments than the container can hold.
    #[error("number of arguments supplied exceeds limit ({limit})")]
    TooManyArguments {
        /// Capacity of the argument container.
        limit: usize,
    },

    /// An option value that could not be decoded.
    #[error("{source} \"{key}\"")]
    Option {
        /// The key the value was supplied under.
        key: String,
        /// Why the value was rejected.
        #[source]
        source: DecodeError,
    },

    /// A leftover argument that could not be decoded into the container.
    #[error(transparent)]
    Argument(#[from] DecodeError),
}

fn unknown_options_message(keys: &[String]) -> String {
    let noun = if keys.len() > 1 { "options" } else { "option" };
    format!("Invalid command line {noun}: ({})", keys.join(", "))
}

/// Failure converting a single string token into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The token is not a literal of the requested kind.
    #[error("invalid syntax for {kind}: \"{value}\"")]
    Conversion {
        /// The rejected token.
        value: String,
        /// The requested kind.
        kind: ScalarKind,
    },

    /// The token is numeric but does not fit the requested width.
    #[error("value out of range for {kind}: \"{value}\"")]
    Overflow {
        /// The rejected token.
        value: String,
        /// The requested kind.
        kind: ScalarKind,
    },

    /// The token is not one of the accepted boolean literals.
    #[error("invalid value for bool: \"{value}\"")]
    InvalidBool {
        /// The rejected token.
        value: String,
    },

    /// The token does not match the date/time layout chosen for its length.
    #[error("cannot parse \"{value}\" as a date/time: {source}")]
    Format {
        /// The rejected token.
        value: String,
        /// Error reported by the date/time parser.
        #[source]
        source: chrono::ParseError,
    },

    /// The requested kind cannot be decoded from a string.
    #[error("type not allowed: {kind}")]
    Unsupported {
        /// Name of the unsupported kind.
        kind: String,
    },
}
