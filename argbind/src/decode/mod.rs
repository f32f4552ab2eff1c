//! Conversion of single string tokens into typed scalar values.
//!
//! Every option field and every argument container element is decoded
//! through the [`Scalar`] trait. The set of implementors is closed: the
//! integer family, the unsigned family, `f32`/`f64`, `bool`, `String` and
//! [`chrono::DateTime<FixedOffset>`].
//!
//! Integer tokens may carry a single power-of-ten suffix:
//!
//! | suffix | multiplier |
//! |--------|------------|
//! | `K`    | 10^3       |
//! | `M`    | 10^6       |
//! | `G`    | 10^9       |
//! | `T`    | 10^12      |
//! | `P`    | 10^15      |
//! | `E`    | 10^18      |
//!
//! ```
//! use argbind::decode::{Scalar, decode_into};
//!
//! let mut size = 0_u32;
//! decode_into(&mut size, "42K").expect("decodes");
//! assert_eq!(size, 42_000);
//! assert!(u8::decode("256").is_err());
//! ```

mod kind;
mod number;
mod time;

use chrono::{DateTime, FixedOffset};

pub use kind::{ScalarKind, Value};

use crate::DecodeError;

/// A type that can be decoded from a single command-line token.
pub trait Scalar: Sized {
    /// Kind tag used for placeholders and error messages.
    const KIND: ScalarKind;

    /// Decodes `raw` into a value of this type.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing why `raw` is not a valid literal
    /// for this type.
    fn decode(raw: &str) -> Result<Self, DecodeError>;
}

/// Decodes `raw` and writes it into `target`.
///
/// `target` is only written when decoding succeeds.
///
/// # Errors
///
/// Propagates the [`DecodeError`] from [`Scalar::decode`].
pub fn decode_into<T: Scalar>(target: &mut T, raw: &str) -> Result<(), DecodeError> {
    tracing::trace!(kind = %T::KIND, raw, "decoding scalar");
    *target = T::decode(raw)?;
    Ok(())
}

/// Decodes `raw` as the scalar kind chosen at runtime.
///
/// # Errors
///
/// Returns a [`DecodeError`] when `raw` is not a valid literal for `kind`.
pub fn decode(kind: ScalarKind, raw: &str) -> Result<Value, DecodeError> {
    Ok(match kind {
        ScalarKind::I8 => Value::I8(i8::decode(raw)?),
        ScalarKind::I16 => Value::I16(i16::decode(raw)?),
        ScalarKind::I32 => Value::I32(i32::decode(raw)?),
        ScalarKind::I64 => Value::I64(i64::decode(raw)?),
        ScalarKind::Isize => Value::Isize(isize::decode(raw)?),
        ScalarKind::U8 => Value::U8(u8::decode(raw)?),
        ScalarKind::U16 => Value::U16(u16::decode(raw)?),
        ScalarKind::U32 => Value::U32(u32::decode(raw)?),
        ScalarKind::U64 => Value::U64(u64::decode(raw)?),
        ScalarKind::Usize => Value::Usize(usize::decode(raw)?),
        ScalarKind::F32 => Value::F32(f32::decode(raw)?),
        ScalarKind::F64 => Value::F64(f64::decode(raw)?),
        ScalarKind::Bool => Value::Bool(bool::decode(raw)?),
        ScalarKind::String => Value::String(String::decode(raw)?),
        ScalarKind::DateTime => Value::DateTime(DateTime::<FixedOffset>::decode(raw)?),
    })
}

macro_rules! integer_scalar {
    ($parse:path => $($ty:ty: $kind:ident),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                fn decode(raw: &str) -> Result<Self, DecodeError> {
                    $parse(raw, Self::KIND)
                }
            }
        )+
    };
}

integer_scalar!(number::parse_signed =>
    i8: I8,
    i16: I16,
    i32: I32,
    i64: I64,
    isize: Isize,
);

integer_scalar!(number::parse_unsigned =>
    u8: U8,
    u16: U16,
    u32: U32,
    u64: U64,
    usize: Usize,
);

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        number::parse_float(raw, Self::KIND, Self::is_infinite)
    }
}

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        number::parse_float(raw, Self::KIND, Self::is_infinite)
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(DecodeError::InvalidBool {
                value: raw.to_owned(),
            }),
        }
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        Ok(raw.to_owned())
    }
}

impl Scalar for DateTime<FixedOffset> {
    const KIND: ScalarKind = ScalarKind::DateTime;

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        time::parse_datetime(raw)
    }
}
