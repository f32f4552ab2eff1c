//! Parsing of per-field metadata tags.

use crate::ConfigError;

/// Maximum number of `:`-separated segments in a tag.
const MAX_SEGMENTS: usize = 4;

/// The parts of a field tag, borrowed from the raw string.
///
/// `short` and `long` are only meaningful when [`Tag::has_keys`] is true;
/// otherwise keys are derived from the field name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tag<'t> {
    explicit: bool,
    pub(crate) short: Option<char>,
    pub(crate) long: Option<&'t str>,
    pub(crate) placeholder: Option<&'t str>,
    pub(crate) help: &'t str,
}

impl<'t> Tag<'t> {
    /// Splits `raw` into keys, placeholder and help text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ShortKeyTooLong`] when the short segment of a
    /// three or four segment tag holds more than one character.
    pub(crate) fn parse(field: &str, raw: &'t str) -> Result<Self, ConfigError> {
        let segments: Vec<&'t str> = raw.splitn(MAX_SEGMENTS, ':').collect();
        let tag = match *segments.as_slice() {
            [] | [_] => Self {
                help: raw,
                ..Self::default()
            },
            [key, help] => {
                let mut chars = key.chars();
                let (short, long) = match (chars.next(), chars.next()) {
                    (None, _) => (None, None),
                    (Some(c), None) => (Some(c), None),
                    (Some(_), Some(_)) => (None, Some(key)),
                };
                Self {
                    explicit: true,
                    short,
                    long,
                    placeholder: None,
                    help,
                }
            }
            [short, long, help] => Self {
                explicit: true,
                short: short_key(field, short)?,
                long: non_empty(long),
                placeholder: None,
                help,
            },
            [short, long, placeholder, help, ..] => Self {
                explicit: true,
                short: short_key(field, short)?,
                long: non_empty(long),
                placeholder: Some(placeholder),
                help,
            },
        };
        Ok(tag)
    }

    /// Whether the tag names the keys itself.
    pub(crate) const fn has_keys(&self) -> bool {
        self.explicit
    }
}

fn non_empty(segment: &str) -> Option<&str> {
    (!segment.is_empty()).then_some(segment)
}

fn short_key(field: &str, segment: &str) -> Result<Option<char>, ConfigError> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        (Some(_), Some(_)) => Err(ConfigError::ShortKeyTooLong {
            field: field.to_owned(),
            key: segment.to_owned(),
        }),
    }
}
