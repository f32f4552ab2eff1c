//! Command-line option and argument binding.
//!
//! `argbind` writes command-line options straight into the fields of a
//! record and collects the remaining arguments into a `Vec`, a capped `Vec`
//! or a fixed-size array. Keys are derived from field names: a field
//! `answer` answers to `-a` and `--answer`. A per-field tag adds help text
//! or overrides the keys, and the same metadata drives the usage line and
//! help text.
//!
//! ```
//! use argbind::{Binder, Options};
//!
//! #[derive(Options, Default)]
//! struct Opts {
//!     #[argbind("I:Supply your answer")]
//!     pub answer: i64,
//!     #[argbind("translate:Enable babel fish translator")]
//!     pub babel: bool,
//! }
//!
//! let mut opts = Opts::default();
//! let mut files = [String::new(), String::new()];
//! let parser = Binder::new(["mycommand", "-I", "42K", "--translate", "towel.txt"])
//!     .options(&mut opts)
//!     .arguments(&mut files)
//!     .build()?;
//! let help = parser.help();
//! parser.parse()?;
//!
//! assert_eq!(opts.answer, 42_000);
//! assert!(opts.babel);
//! assert_eq!(files, ["towel.txt", ""]);
//! assert_eq!(help.usage_line(), "mycommand [OPTIONS] [string] [string]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Registration problems (a clashing key, a malformed tag, targets bound in
//! the wrong order) are reported by [`Binder::build`] as [`ConfigError`].
//! Bad user input is reported by [`Parser::parse`] as [`ParseError`].

#[cfg(feature = "derive")]
pub use argbind_macros::Options;

mod arguments;
mod bind;
mod binder;
pub mod decode;
mod error;
mod field;
pub mod help;
mod keys;
mod token;

pub use arguments::{ArgumentSink, Capped, capped};
pub use binder::{Binder, Parser};
pub use error::{ConfigError, DecodeError, ParseError, TargetError};
pub use field::{FieldDescriptor, FieldSet, Options};
pub use help::Help;
pub use keys::kebab_case;
