//! Usage line and help text built from field descriptors.
//!
//! The help text follows a manual-page layout:
//!
//! ```text
//! NAME
//!     Hitchhiker Ipsum
//!
//! SYNOPSIS
//!     mycommand [OPTIONS] [string]...
//!
//! OPTIONS
//!     -a i64, --answer=i64
//!                 The ultimate answer
//! ```
//!
//! `NAME`, `SYNOPSIS` and `DESCRIPTION` always come first. The synopsis
//! defaults to the usage line. Other sections follow the option list, or
//! are inserted before a given option when registered as `key:HEADING`.
//! [`Help`] also serialises with `serde` so external tools can produce
//! their own documentation.

mod wrap;

use std::io;

use serde::Serialize;

use crate::decode::ScalarKind;
use crate::field::FieldDescriptor;

use self::wrap::{hang, wrap};

/// Version of the serialised help schema.
pub const HELP_IR_VERSION: &str = "1.0";

/// Indent of section paragraphs and option keys.
pub const INDENT: usize = 4;
/// Column where option help text starts.
pub const HELP_COLUMN: usize = 16;
/// Lines are kept shorter than this many characters.
pub const WIDTH: usize = 79;

const NAME: &str = "NAME";
const SYNOPSIS: &str = "SYNOPSIS";
const DESCRIPTION: &str = "DESCRIPTION";

/// Shape of the argument container, as shown in the usage line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgumentsInfo {
    /// Element kind.
    pub kind: ScalarKind,
    /// Maximum number of arguments, `None` when unbounded.
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
enum Entry {
    Option { field: usize },
    Section { heading: String, paragraphs: Vec<String> },
}

/// Help metadata for one parser.
///
/// Owned, so it stays usable after [`crate::Parser::parse`] consumed the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Help {
    ir_version: &'static str,
    cmd: String,
    #[serde(skip)]
    arg_count: usize,
    fields: Vec<FieldDescriptor>,
    arguments: Option<ArgumentsInfo>,
    name: Option<Vec<String>>,
    synopsis: Option<Vec<String>>,
    description: Option<Vec<String>>,
    entries: Vec<Entry>,
}

impl Help {
    pub(crate) fn new(
        args: &[String],
        fields: Vec<FieldDescriptor>,
        arguments: Option<ArgumentsInfo>,
    ) -> Self {
        let entries = (0..fields.len())
            .map(|field| Entry::Option { field })
            .collect();
        Self {
            ir_version: HELP_IR_VERSION,
            cmd: args.first().cloned().unwrap_or_default(),
            arg_count: args.len(),
            fields,
            arguments,
            name: None,
            synopsis: None,
            description: None,
            entries,
        }
    }

    /// Full program path, as given in the first argument.
    #[must_use]
    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// Program name without its directory.
    #[must_use]
    pub fn command_name(&self) -> &str {
        self.cmd.rsplit(['/', '\\']).next().unwrap_or_default()
    }

    /// Whether anything beyond the program path was supplied.
    #[must_use]
    pub const fn has_args(&self) -> bool {
        self.arg_count > 1
    }

    /// Registered fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Shape of the argument container, if one was bound.
    #[must_use]
    pub const fn arguments(&self) -> Option<ArgumentsInfo> {
        self.arguments
    }

    /// Adds a section of paragraphs to the help text.
    ///
    /// `NAME`, `SYNOPSIS` and `DESCRIPTION` replace the standard head
    /// sections. A heading of the form `key:HEADING` is inserted before the
    /// option with that short or long key; without a match, or without a
    /// key, the section is appended after the options. An empty heading
    /// adds bare paragraphs.
    ///
    /// ```
    /// use argbind::Binder;
    ///
    /// let mut files: Vec<String> = Vec::new();
    /// let parser = Binder::new(["/bin/mycommand"]).arguments(&mut files).build()?;
    /// let mut help = parser.help();
    /// help.section("NAME", &["mycommand - do things"]);
    /// assert_eq!(
    ///     help.render(),
    ///     "NAME\n    mycommand - do things\n\nSYNOPSIS\n    mycommand [string]...\n\n",
    /// );
    /// # Ok::<(), argbind::ConfigError>(())
    /// ```
    pub fn section(&mut self, heading: &str, paragraphs: &[&str]) -> &mut Self {
        let owned: Vec<String> = paragraphs.iter().map(|p| (*p).to_owned()).collect();
        match heading {
            NAME => self.name = Some(owned),
            SYNOPSIS => self.synopsis = Some(owned),
            DESCRIPTION => self.description = Some(owned),
            _ => self.insert_section(heading, owned),
        }
        self
    }

    fn insert_section(&mut self, heading: &str, paragraphs: Vec<String>) {
        let (key, title) = match heading.split_once(':') {
            Some((key, title)) => (Some(key), title),
            None => (None, heading),
        };
        let position = key.and_then(|k| {
            self.entries.iter().position(|entry| match entry {
                Entry::Option { field } => self
                    .fields
                    .get(*field)
                    .is_some_and(|descriptor| descriptor.keys().any(|candidate| candidate == k)),
                Entry::Section { .. } => false,
            })
        });
        let entry = Entry::Section {
            heading: title.to_owned(),
            paragraphs,
        };
        match position {
            Some(index) => self.entries.insert(index, entry),
            None => {
                if let Some(k) = key {
                    tracing::debug!(key = k, heading = title, "no option for section; appending");
                }
                self.entries.push(entry);
            }
        }
    }

    /// The usage synopsis: program name, option marker and argument slots.
    ///
    /// `mycommand [OPTIONS] [string]...`
    #[must_use]
    pub fn usage_line(&self) -> String {
        let mut line = self.command_name().to_owned();
        match self.fields.len() {
            0 => {}
            1 => line.push_str(" [OPTION]"),
            _ => line.push_str(" [OPTIONS]"),
        }
        if let Some(info) = self.arguments {
            let slot = format!(" [{}]", info.kind);
            match info.capacity {
                Some(0) => {}
                Some(1) => line.push_str(&slot),
                Some(2) => {
                    line.push_str(&slot);
                    line.push_str(&slot);
                }
                _ => {
                    line.push_str(&slot);
                    line.push_str("...");
                }
            }
        }
        line
    }

    /// The key of the first boolean `help` or `h` option, with its dashes.
    fn help_key(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .filter(|field| field.is_flag())
            .find_map(|field| {
                if field.long.as_deref() == Some("help") {
                    Some("--help")
                } else if field.short == Some('h') {
                    Some("-h")
                } else {
                    None
                }
            })
    }

    /// The usage message, with a pointer to the help option when one exists.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut text = format!("Usage: {}\n", self.usage_line());
        if let Some(key) = self.help_key() {
            text.push_str(&format!(
                "Try '{} {key}' for more information.\n",
                self.command_name()
            ));
        }
        text
    }

    /// The complete help text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let default_synopsis = [self.usage_line()];
        let heads = [
            (NAME, self.name.as_deref()),
            (SYNOPSIS, Some(self.synopsis.as_deref().unwrap_or(&default_synopsis))),
            (DESCRIPTION, self.description.as_deref()),
        ];
        for (heading, body) in heads {
            if let Some(paragraphs) = body {
                out.push_str(&section_text(heading, paragraphs));
                out.push('\n');
            }
        }

        let mut previous: Option<&Entry> = None;
        for entry in &self.entries {
            match entry {
                Entry::Section {
                    heading,
                    paragraphs,
                } => {
                    if matches!(previous, Some(Entry::Section { .. })) {
                        out.push('\n');
                    }
                    out.push_str(&section_text(heading, paragraphs));
                }
                Entry::Option { field } => {
                    if previous.is_none() {
                        out.push_str(if self.fields.len() > 1 { "OPTIONS" } else { "OPTION" });
                    }
                    if !matches!(previous, Some(Entry::Option { .. })) {
                        out.push('\n');
                    }
                    if let Some(descriptor) = self.fields.get(*field) {
                        out.push_str(&option_text(descriptor));
                    }
                    out.push('\n');
                }
            }
            previous = Some(entry);
        }

        let mut text = out.trim_end_matches('\n').to_owned();
        text.push_str("\n\n");
        text
    }

    /// Writes [`Help::usage`] to `out`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_usage<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.usage().as_bytes())
    }

    /// Writes [`Help::render`] to `out`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn write_help<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    /// Prints the usage message to standard output.
    ///
    /// # Errors
    ///
    /// Propagates write failures on standard output.
    pub fn print_usage(&self) -> io::Result<()> {
        self.write_usage(io::stdout().lock())
    }

    /// Prints the help text to standard output.
    ///
    /// # Errors
    ///
    /// Propagates write failures on standard output.
    pub fn print_help(&self) -> io::Result<()> {
        self.write_help(io::stdout().lock())
    }
}

/// A heading followed by indented, blank-line separated paragraphs.
fn section_text(heading: &str, paragraphs: &[String]) -> String {
    let mut out = String::new();
    if !heading.is_empty() {
        out.push_str(&wrap(heading, WIDTH));
        out.push('\n');
    }
    let pad = " ".repeat(INDENT);
    for (n, paragraph) in paragraphs.iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        if !paragraph.is_empty() {
            out.push_str(&pad);
        }
        out.push_str(&hang(&wrap(paragraph, WIDTH - INDENT), INDENT));
        out.push('\n');
    }
    out
}

/// The key list of one option, with its help text at [`HELP_COLUMN`].
fn option_text(field: &FieldDescriptor) -> String {
    let show_placeholder = !field.placeholder.is_empty()
        && !(field.is_flag() && field.placeholder == field.kind.name());
    let mut line = " ".repeat(INDENT);
    if let Some(short) = field.short {
        line.push('-');
        line.push(short);
        if show_placeholder {
            line.push(' ');
            line.push_str(&field.placeholder);
        }
    }
    if let Some(long) = &field.long {
        if field.short.is_some() {
            line.push_str(", ");
        }
        line.push_str("--");
        line.push_str(long);
        if show_placeholder {
            line.push('=');
            line.push_str(&field.placeholder);
        }
    }
    if !field.help.is_empty() {
        let used = line.chars().count();
        if used >= HELP_COLUMN {
            line.push('\n');
            line.push_str(&" ".repeat(HELP_COLUMN));
        } else {
            line.push_str(&" ".repeat(HELP_COLUMN - used));
        }
        line.push_str(&hang(&wrap(&field.help, WIDTH - HELP_COLUMN), HELP_COLUMN));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests;
