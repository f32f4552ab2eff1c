//! Field registration: descriptors, setters and the [`Options`] trait.

use serde::Serialize;

use crate::decode::{Scalar, ScalarKind, decode_into};
use crate::keys::{self, KeyRegistry};
use crate::{ConfigError, DecodeError};

/// Metadata describing one registered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name as declared on the record.
    pub name: String,
    /// Scalar kind of the field.
    pub kind: ScalarKind,
    /// Single-character key used with `-`.
    pub short: Option<char>,
    /// Keyword used with `--`.
    pub long: Option<String>,
    /// Help text shown in the option list.
    pub help: String,
    /// Value placeholder shown after the keys.
    pub placeholder: String,
}

impl FieldDescriptor {
    /// Keys to look up on the command line, short key first.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.short
            .map(String::from)
            .into_iter()
            .chain(self.long.iter().cloned())
    }

    /// Whether the field is set by its presence alone.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.kind.is_flag()
    }
}

type Setter<'a> = Box<dyn FnMut(&str) -> Result<(), DecodeError> + 'a>;

/// A descriptor paired with the setter writing the field it describes.
pub(crate) struct Slot<'a> {
    pub(crate) descriptor: FieldDescriptor,
    pub(crate) setter: Setter<'a>,
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of fields registered by an [`Options`] record.
///
/// Each call to [`FieldSet::field`] borrows one field mutably for `'a`, so
/// the parser can write it later without touching the rest of the record.
#[derive(Debug, Default)]
pub struct FieldSet<'a> {
    registry: KeyRegistry,
    slots: Vec<Slot<'a>>,
}

impl<'a> FieldSet<'a> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `target` under `name`, with an optional metadata tag.
    ///
    /// The tag has up to four `:`-separated segments: `help`,
    /// `key:help`, `short:long:help` or `short:long:placeholder:help`.
    /// Without key segments the keys are derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `name` is not a public field name, when
    /// the tag repeats a key already in use or names a short key longer than
    /// one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use argbind::FieldSet;
    ///
    /// let mut answer = 0_i64;
    /// let mut fields = FieldSet::new();
    /// fields.field("Answer", Some("The ultimate answer"), &mut answer)?;
    /// let descriptor = &fields.descriptors()[0];
    /// assert_eq!(descriptor.short, Some('a'));
    /// assert_eq!(descriptor.long.as_deref(), Some("answer"));
    /// # Ok::<(), argbind::ConfigError>(())
    /// ```
    pub fn field<T: Scalar + 'a>(
        &mut self,
        name: &str,
        tag: Option<&str>,
        target: &'a mut T,
    ) -> Result<&mut Self, ConfigError> {
        let descriptor = keys::describe(&mut self.registry, name, T::KIND, tag)?;
        tracing::trace!(field = name, short = ?descriptor.short, long = ?descriptor.long, "registered field");
        self.slots.push(Slot {
            descriptor,
            setter: Box::new(move |raw| decode_into(target, raw)),
        });
        Ok(self)
    }

    /// Descriptors in registration order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.slots.iter().map(|slot| slot.descriptor.clone()).collect()
    }

    /// Number of registered fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no field has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn into_slots(self) -> Vec<Slot<'a>> {
        self.slots
    }
}

/// A record whose public fields can be set from the command line.
///
/// Usually derived with `#[derive(Options)]`. A manual implementation
/// registers each field in declaration order:
///
/// ```
/// use argbind::{ConfigError, FieldSet, Options};
///
/// struct Opts {
///     verbose: bool,
///     name: String,
/// }
///
/// impl Options for Opts {
///     fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>) -> Result<(), ConfigError> {
///         fields
///             .field("verbose", Some("Talk more"), &mut self.verbose)?
///             .field("name", None, &mut self.name)?;
///         Ok(())
///     }
/// }
/// ```
pub trait Options {
    /// Registers every field of the record with `fields`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ConfigError`] raised by [`FieldSet::field`].
    fn register<'a>(&'a mut self, fields: &mut FieldSet<'a>) -> Result<(), ConfigError>;
}
