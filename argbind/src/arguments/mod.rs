//! Containers that collect leftover positional arguments.
//!
//! Three shapes are supported:
//!
//! - `&mut Vec<T>` accepts any number of arguments and is replaced by
//!   exactly the decoded values;
//! - [`Capped`] (built with [`capped`]) does the same but rejects more than
//!   its limit;
//! - `&mut [T; N]` accepts up to `N` arguments, written index by index.
//!   Slots past the last argument keep their previous values.

use crate::DecodeError;
use crate::decode::{Scalar, ScalarKind};

/// Destination for leftover arguments.
pub trait ArgumentSink {
    /// Kind of each element.
    fn kind(&self) -> ScalarKind;

    /// Maximum number of arguments accepted, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Decodes `values` into the container.
    ///
    /// `values` never exceeds [`ArgumentSink::capacity`].
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] met. Elements decoded before it
    /// may already have been written.
    fn fill(&mut self, values: &[String]) -> Result<(), DecodeError>;
}

fn decode_all<T: Scalar>(values: &[String]) -> Result<Vec<T>, DecodeError> {
    values.iter().map(|raw| T::decode(raw)).collect()
}

impl<T: Scalar> ArgumentSink for &mut Vec<T> {
    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn fill(&mut self, values: &[String]) -> Result<(), DecodeError> {
        **self = decode_all(values)?;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> ArgumentSink for &mut [T; N] {
    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn capacity(&self) -> Option<usize> {
        Some(N)
    }

    fn fill(&mut self, values: &[String]) -> Result<(), DecodeError> {
        for (slot, raw) in self.iter_mut().zip(values) {
            *slot = T::decode(raw)?;
        }
        Ok(())
    }
}

/// A vector that accepts at most `limit` arguments.
#[derive(Debug)]
pub struct Capped<'v, T> {
    target: &'v mut Vec<T>,
    limit: usize,
}

/// Wraps `target` so that more than `limit` arguments are rejected.
///
/// ```
/// use argbind::{Binder, capped};
///
/// let mut files: Vec<String> = Vec::new();
/// let parser = Binder::new(["cmd", "a", "b", "c"])
///     .arguments(capped(&mut files, 2))
///     .build()?;
/// let err = parser.parse().expect_err("too many");
/// assert_eq!(err.to_string(), "number of arguments supplied exceeds limit (2)");
/// # Ok::<(), argbind::ConfigError>(())
/// ```
pub const fn capped<T>(target: &mut Vec<T>, limit: usize) -> Capped<'_, T> {
    Capped { target, limit }
}

impl<T: Scalar> ArgumentSink for Capped<'_, T> {
    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.limit)
    }

    fn fill(&mut self, values: &[String]) -> Result<(), DecodeError> {
        *self.target = decode_all(values)?;
        Ok(())
    }
}
