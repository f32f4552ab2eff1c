//! Closed set of scalar kinds understood by the decoder.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::DecodeError;

/// Kind tag of a bindable field or argument container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `bool`
    Bool,
    /// `String`
    String,
    /// `chrono::DateTime<FixedOffset>`
    DateTime,
}

impl ScalarKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::Usize,
        Self::F32,
        Self::F64,
        Self::Bool,
        Self::String,
        Self::DateTime,
    ];

    /// Short lowercase name, also used as the default value placeholder.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::DateTime => "datetime",
        }
    }

    /// Whether options of this kind act as flags that take no value.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(self, Self::Bool)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .or(match s {
                "String" => Some(Self::String),
                "DateTime" => Some(Self::DateTime),
                _ => None,
            })
            .ok_or_else(|| DecodeError::Unsupported { kind: s.to_owned() })
    }
}

/// A decoded value tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An `i8`.
    I8(i8),
    /// An `i16`.
    I16(i16),
    /// An `i32`.
    I32(i32),
    /// An `i64`.
    I64(i64),
    /// An `isize`.
    Isize(isize),
    /// A `u8`.
    U8(u8),
    /// A `u16`.
    U16(u16),
    /// A `u32`.
    U32(u32),
    /// A `u64`.
    U64(u64),
    /// A `usize`.
    Usize(usize),
    /// An `f32`.
    F32(f32),
    /// An `f64`.
    F64(f64),
    /// A `bool`.
    Bool(bool),
    /// A `String`.
    String(String),
    /// A date/time with its UTC offset.
    DateTime(DateTime<FixedOffset>),
}

impl Value {
    /// Kind of the held value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::Isize(_) => ScalarKind::Isize,
            Self::U8(_) => ScalarKind::U8,
            Self::U16(_) => ScalarKind::U16,
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::Usize(_) => ScalarKind::Usize,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::Bool(_) => ScalarKind::Bool,
            Self::String(_) => ScalarKind::String,
            Self::DateTime(_) => ScalarKind::DateTime,
        }
    }
}
