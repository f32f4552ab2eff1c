//! Greedy word wrapping for help text.

/// Wraps `text` so that every line is shorter than `width` characters.
///
/// Existing line breaks are kept. Words are split on single spaces and a
/// word longer than the width gets a line of its own.
pub(crate) fn wrap(text: &str, width: usize) -> String {
    let limit = width.saturating_sub(1);
    let mut out = String::with_capacity(text.len());
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let mut used = 0;
        for (i, word) in line.split(' ').enumerate() {
            let len = word.chars().count();
            if i == 0 {
                used = len;
            } else if used + 1 + len > limit {
                out.push('\n');
                used = len;
            } else {
                out.push(' ');
                used += 1 + len;
            }
            out.push_str(word);
        }
    }
    out
}

/// Prefixes every non-empty line after the first with `indent` spaces.
pub(crate) fn hang(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::with_capacity(text.len());
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }
    out
}
