//! Matches tokens against registered fields.

use crate::ParseError;
use crate::field::Slot;
use crate::token::{Claim, Token, TokenKind};

/// Value a boolean field receives from a bare or short key.
const FLAG_SET: &str = "1";
/// Value a boolean field receives from `--key=`.
const FLAG_CLEARED: &str = "0";

/// Writes every field that has a matching token, in declaration order.
///
/// The short key is tried first, then the long key. Only the last token
/// carrying the chosen key is claimed; earlier repeats stay unclaimed and
/// surface as unknown keys. Stops at the first value that fails to decode;
/// fields written before it keep their new values.
pub(crate) fn bind_fields(
    slots: &mut [Slot<'_>],
    tokens: &mut [Token],
) -> Result<(), ParseError> {
    for slot in slots.iter_mut() {
        let Some((key, index)) = slot.descriptor.keys().find_map(|key| {
            let index = tokens.iter().rposition(|token| token.key == key)?;
            Some((key, index))
        }) else {
            continue;
        };
        let Some(token) = tokens.get_mut(index) else {
            continue;
        };

        let flag = slot.descriptor.is_flag();
        token.claim = if flag { Claim::Flag } else { Claim::Option };
        let kind = token.kind;
        let value = token.value.clone();

        let raw = match (flag, kind) {
            (true, TokenKind::LongAssigned) if value.is_empty() => FLAG_CLEARED,
            (true, TokenKind::LongAssigned) | (false, _) => value.as_str(),
            (true, _) => FLAG_SET,
        };
        tracing::debug!(field = %slot.descriptor.name, key = %key, raw, "binding option");
        (slot.setter)(raw).map_err(|source| ParseError::option(&key, source))?;
    }
    Ok(())
}

/// Keys no field claimed, in the order they were supplied.
pub(crate) fn unknown_keys(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.has_key() && token.claim == Claim::Unclaimed)
        .map(|token| token.key.clone())
        .collect()
}

/// Non-empty positional values plus values attached to boolean keys.
pub(crate) fn leftovers(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| match token.kind {
            TokenKind::Positional => true,
            TokenKind::Short | TokenKind::Long => token.claim == Claim::Flag,
            TokenKind::LongAssigned => false,
        })
        .filter(|token| !token.value.is_empty())
        .map(|token| token.value.clone())
        .collect()
}
