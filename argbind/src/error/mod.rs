//! Error types produced while registering fields and parsing arguments.
//!
//! Two families are kept apart on purpose: [`ConfigError`] describes static
//! misuse of the API and is returned from [`crate::Binder::build`], while
//! [`ParseError`] describes bad user input and is returned from
//! [`crate::Parser::parse`].

mod constructors;
mod types;

pub use types::{ConfigError, DecodeError, ParseError, TargetError};
