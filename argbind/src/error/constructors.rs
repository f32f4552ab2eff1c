//! Shorthand constructors used by the decoder and binder.

use super::{DecodeError, ParseError};
use crate::decode::ScalarKind;

impl DecodeError {
    pub(crate) fn conversion(value: &str, kind: ScalarKind) -> Self {
        Self::Conversion {
            value: value.to_owned(),
            kind,
        }
    }

    pub(crate) fn overflow(value: &str, kind: ScalarKind) -> Self {
        Self::Overflow {
            value: value.to_owned(),
            kind,
        }
    }

    pub(crate) fn format(value: &str, source: chrono::ParseError) -> Self {
        Self::Format {
            value: value.to_owned(),
            source,
        }
    }
}

impl ParseError {
    /// Wraps a decode failure with the key its value was supplied under.
    pub(crate) fn option(key: &str, source: DecodeError) -> Self {
        Self::Option {
            key: key.to_owned(),
            source,
        }
    }
}
