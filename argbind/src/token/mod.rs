//! Splits raw arguments into flag, keyword and positional tokens.

use std::sync::LazyLock;

use regex::Regex;

/// Shape of a command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// One letter of a `-letters` group.
    Short,
    /// `--word`, possibly followed by a value argument.
    Long,
    /// `--word=value`.
    LongAssigned,
    /// Anything else.
    Positional,
}

/// How the binder consumed a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Claim {
    Unclaimed,
    /// Bound to a boolean field; an attached value is left over.
    Flag,
    /// Bound to a valued field together with its value.
    Option,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// Empty for positional tokens.
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) claim: Claim,
}

impl Token {
    fn keyed(kind: TokenKind, key: &str, value: &str) -> Self {
        Self {
            kind,
            key: key.to_owned(),
            value: value.to_owned(),
            claim: Claim::Unclaimed,
        }
    }

    fn positional(value: &str) -> Self {
        Self::keyed(TokenKind::Positional, "", value)
    }

    pub(crate) fn has_key(&self) -> bool {
        !self.key.is_empty()
    }
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

struct Patterns {
    long_assigned: Regex,
    long: Regex,
    short: Regex,
}

impl Patterns {
    #[expect(clippy::expect_used, reason = "patterns are compile-time constants")]
    fn new() -> Self {
        Self {
            long_assigned: Regex::new(r"^--([0-9A-Za-z_][0-9A-Za-z_-]*)=((?s:.*))$")
                .expect("static regex must compile"),
            long: Regex::new(r"^--([0-9A-Za-z_][0-9A-Za-z_-]*)$")
                .expect("static regex must compile"),
            short: Regex::new(r"^-([a-zA-Z]+)$").expect("static regex must compile"),
        }
    }
}

/// Removes one pair of surrounding double quotes.
pub(crate) fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Tokenizes `args`, which must not include the program path.
///
/// A bare `--word` or a `-letters` group leaves its last key pending; the
/// next argument that is not itself a key becomes that key's value.
pub(crate) fn tokenize<S: AsRef<str>>(args: &[S]) -> Vec<Token> {
    let patterns = &*PATTERNS;
    let mut tokens: Vec<Token> = Vec::with_capacity(args.len());
    let mut pending = false;

    for arg in args.iter().map(AsRef::as_ref) {
        if arg.starts_with('-') {
            if let Some((_, [key, value])) =
                patterns.long_assigned.captures(arg).map(|c| c.extract())
            {
                tokens.push(Token::keyed(
                    TokenKind::LongAssigned,
                    key,
                    strip_quotes(value),
                ));
                pending = false;
                continue;
            }
            if let Some((_, [key])) = patterns.long.captures(arg).map(|c| c.extract()) {
                tokens.push(Token::keyed(TokenKind::Long, key, ""));
                pending = true;
                continue;
            }
            if let Some((_, [letters])) = patterns.short.captures(arg).map(|c| c.extract()) {
                let mut buf = [0; 4];
                tokens.extend(letters.chars().map(|letter| {
                    Token::keyed(TokenKind::Short, letter.encode_utf8(&mut buf), "")
                }));
                pending = true;
                continue;
            }
        }

        match tokens.last_mut() {
            Some(last) if pending => {
                last.value = strip_quotes(arg).to_owned();
                pending = false;
            }
            _ => tokens.push(Token::positional(strip_quotes(arg))),
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized arguments");
    tokens
}
