//! Builder that collects binding targets and the parser it produces.

use crate::arguments::ArgumentSink;
use crate::bind::{bind_fields, leftovers, unknown_keys};
use crate::field::{FieldDescriptor, FieldSet, Options, Slot};
use crate::help::{ArgumentsInfo, Help};
use crate::token::tokenize;
use crate::{ConfigError, ParseError, TargetError};

/// Collects the argument list, an option record and an argument container.
///
/// Targets are borrowed mutably for `'a`; they are written by
/// [`Parser::parse`]. Registration errors are held back until
/// [`Binder::build`].
///
/// ```
/// use argbind::{Binder, Options};
///
/// #[derive(Options, Default)]
/// struct Opts {
///     pub answer: i64,
///     pub babel: bool,
///     pub question: String,
/// }
///
/// let mut opts = Opts::default();
/// let mut args: Vec<String> = Vec::new();
/// Binder::new(["mycommand", "-a", "42", "-b", "-q", "What?", "Towel"])
///     .options(&mut opts)
///     .arguments(&mut args)
///     .build()?
///     .parse()?;
/// assert_eq!(opts.answer, 42);
/// assert!(opts.babel);
/// assert_eq!(opts.question, "What?");
/// assert_eq!(args, ["Towel"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Binder<'a> {
    args: Vec<String>,
    fields: Option<FieldSet<'a>>,
    sink: Option<Box<dyn ArgumentSink + 'a>>,
    error: Option<ConfigError>,
}

impl std::fmt::Debug for Binder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("args", &self.args)
            .field("fields", &self.fields)
            .field("has_sink", &self.sink.is_some())
            .field("error", &self.error)
            .finish()
    }
}

impl<'a> Binder<'a> {
    /// Starts a binder over `args`; the first element is the program path.
    #[must_use]
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            fields: None,
            sink: None,
            error: None,
        }
    }

    /// Starts a binder over the process arguments.
    ///
    /// Arguments that are not valid Unicode are converted lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    fn fail(&mut self, error: ConfigError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Binds the option record. Must come before [`Binder::arguments`].
    #[must_use]
    pub fn options<O: Options + ?Sized>(mut self, record: &'a mut O) -> Self {
        if self.fields.is_some() {
            self.fail(TargetError::SecondRecord.into());
        } else if self.sink.is_some() {
            self.fail(TargetError::RecordAfterContainer.into());
        } else {
            let mut fields = FieldSet::new();
            match record.register(&mut fields) {
                Ok(()) => self.fields = Some(fields),
                Err(error) => self.fail(error),
            }
        }
        self
    }

    /// Binds the container that receives leftover arguments.
    ///
    /// Accepts `&mut Vec<T>`, `&mut [T; N]` or a [`crate::Capped`] vector.
    #[must_use]
    pub fn arguments<S: ArgumentSink + 'a>(mut self, container: S) -> Self {
        if self.sink.is_some() {
            self.fail(TargetError::SecondContainer.into());
        } else {
            self.sink = Some(Box::new(container));
        }
        self
    }

    /// Finishes registration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] met while binding targets, or
    /// [`TargetError::Missing`] when no target was bound.
    pub fn build(self) -> Result<Parser<'a>, ConfigError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.fields.is_none() && self.sink.is_none() {
            return Err(TargetError::Missing.into());
        }
        let slots = self.fields.map(FieldSet::into_slots).unwrap_or_default();
        tracing::debug!(
            fields = slots.len(),
            container = self.sink.is_some(),
            "binder built"
        );
        Ok(Parser {
            args: self.args,
            slots,
            sink: self.sink,
        })
    }
}

/// Parses the argument list into the bound targets.
pub struct Parser<'a> {
    args: Vec<String>,
    slots: Vec<Slot<'a>>,
    sink: Option<Box<dyn ArgumentSink + 'a>>,
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("args", &self.args)
            .field("slots", &self.slots)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Parser<'_> {
    /// Descriptors of the bound fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        self.slots
            .iter()
            .map(|slot| slot.descriptor.clone())
            .collect()
    }

    /// Help metadata for the bound targets.
    #[must_use]
    pub fn help(&self) -> Help {
        let arguments = self.sink.as_ref().map(|sink| ArgumentsInfo {
            kind: sink.kind(),
            capacity: sink.capacity(),
        });
        Help::new(&self.args, self.fields(), arguments)
    }

    /// Writes option values into the record and leftovers into the
    /// container.
    ///
    /// Fields are written in declaration order. A failure leaves earlier
    /// writes in place.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Option`] when an option value does not decode;
    /// - [`ParseError::UnknownOptions`] when keys remain that no field
    ///   claims;
    /// - [`ParseError::TooManyArguments`] when leftovers exceed the
    ///   container capacity;
    /// - [`ParseError::Argument`] when a leftover does not decode.
    pub fn parse(self) -> Result<(), ParseError> {
        let Self {
            args,
            mut slots,
            sink,
        } = self;
        let mut tokens = tokenize(args.get(1..).unwrap_or_default());
        bind_fields(&mut slots, &mut tokens)?;

        let unknown = unknown_keys(&tokens);
        if !unknown.is_empty() {
            return Err(ParseError::UnknownOptions { keys: unknown });
        }

        let rest = leftovers(&tokens);
        let Some(mut sink) = sink else {
            if !rest.is_empty() {
                tracing::debug!(count = rest.len(), "no argument container; leftovers ignored");
            }
            return Ok(());
        };
        if let Some(limit) = sink.capacity().filter(|&limit| rest.len() > limit) {
            return Err(ParseError::TooManyArguments { limit });
        }
        sink.fill(&rest)?;
        Ok(())
    }
}
