//! Key derivation for registered fields.
//!
//! Every field gets at most one short key (a single character used with
//! `-`) and one long key (used with `--`). Keys are either derived from the
//! field name or taken from the field's tag. Both kinds share one
//! namespace: a long key `a` collides with a short key `a`.

mod tag;

use std::collections::HashSet;

use crate::ConfigError;
use crate::decode::ScalarKind;
use crate::field::FieldDescriptor;

pub(crate) use tag::Tag;

/// Keys claimed so far while registering one record.
#[derive(Debug, Default)]
pub(crate) struct KeyRegistry {
    used: HashSet<String>,
}

impl KeyRegistry {
    /// Claims `key`, returning `false` when it was already taken.
    pub(crate) fn claim(&mut self, key: &str) -> bool {
        self.used.insert(key.to_owned())
    }

    fn claim_explicit(&mut self, key: &str) -> Result<(), ConfigError> {
        if self.claim(key) {
            Ok(())
        } else {
            Err(ConfigError::DuplicateKey {
                key: key.to_owned(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Self::Digit
        } else if c.is_lowercase() {
            Self::Lower
        } else if c.is_uppercase() {
            Self::Upper
        } else {
            Self::Other
        }
    }

    const fn is_letter(self) -> bool {
        matches!(self, Self::Lower | Self::Upper)
    }
}

/// Converts a field name into a lowercase, hyphen-separated long key.
///
/// A separator is inserted at each lowercase→uppercase transition and on
/// both sides of a digit run. Existing `_` and `-` separators are kept as a
/// single `-`; separators are never doubled, leading or trailing.
///
/// ```
/// use argbind::kebab_case;
///
/// assert_eq!(kebab_case("TeaCup"), "tea-cup");
/// assert_eq!(kebab_case("cup_of_tea"), "cup-of-tea");
/// assert_eq!(kebab_case("This2That"), "this-2-that");
/// ```
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<CharClass> = None;
    for c in name.chars() {
        if c == '_' || c == '-' {
            push_separator(&mut out);
            prev = None;
            continue;
        }
        let class = CharClass::of(c);
        let boundary = match (prev, class) {
            (Some(CharClass::Lower), CharClass::Upper) => true,
            (Some(before), CharClass::Digit) => before.is_letter(),
            (Some(CharClass::Digit), after) => after.is_letter(),
            _ => false,
        };
        if boundary {
            push_separator(&mut out);
        }
        out.extend(c.to_lowercase());
        prev = Some(class);
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Rejects names that could not have come from an externally settable
/// field.
fn check_visibility(name: &str) -> Result<(), ConfigError> {
    if name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ConfigError::PrivateField {
            field: name.to_owned(),
        })
    }
}

/// Derives short and long keys from the field name.
///
/// Collisions are resolved silently: the short key falls back to the
/// uppercase letter and then to nothing, the long key falls back to
/// nothing.
fn auto_keys(registry: &mut KeyRegistry, name: &str) -> (Option<char>, Option<String>) {
    let short = name.chars().next().and_then(|first| {
        let lower = first.to_ascii_lowercase();
        let upper = first.to_ascii_uppercase();
        [lower, upper]
            .into_iter()
            .find(|letter| registry.claim(letter.encode_utf8(&mut [0; 4])))
    });
    if short.is_none() {
        tracing::debug!(field = name, "no short key left for field");
    }

    let candidate = kebab_case(name);
    let long = if registry.claim(&candidate) {
        Some(candidate)
    } else {
        tracing::debug!(field = name, key = %candidate, "long key already used; field gets none");
        None
    };
    (short, long)
}

/// Builds the descriptor for one field, claiming its keys in `registry`.
pub(crate) fn describe(
    registry: &mut KeyRegistry,
    name: &str,
    kind: ScalarKind,
    raw_tag: Option<&str>,
) -> Result<FieldDescriptor, ConfigError> {
    check_visibility(name)?;
    let tag = Tag::parse(name, raw_tag.unwrap_or_default())?;

    let (short, long) = if tag.has_keys() {
        if let Some(short) = tag.short {
            registry.claim_explicit(short.encode_utf8(&mut [0; 4]))?;
        }
        if let Some(long) = tag.long {
            registry.claim_explicit(long)?;
        }
        (tag.short, tag.long.map(str::to_owned))
    } else {
        auto_keys(registry, name)
    };

    Ok(FieldDescriptor {
        name: name.to_owned(),
        kind,
        short,
        long,
        help: tag.help.to_owned(),
        placeholder: tag.placeholder.unwrap_or(kind.name()).to_owned(),
    })
}

#[cfg(test)]
mod tests;
