// File: fluentmask-core/src/transforms.rs
//! Character-indexed string helpers shared by the built-in masks and by
//! declarative definitions.
//!
//! All positions count `char`s, not bytes, and none of these functions panic:
//! out-of-range requests degrade to returning the input.

/// Returns the last `n` characters of `s`, or all of `s` when it is shorter.
pub fn keep_last(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}

/// Prepends `fill` until `s` is `width` characters long.
///
/// Strings already at least `width` characters long are returned unchanged.
pub fn pad_left(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out: String = std::iter::repeat(fill).take(width - len).collect();
    out.push_str(s);
    out
}

/// Inserts `text` before the character at `index`.
///
/// `index == len` appends. An index past the end leaves `s` unchanged.
pub fn insert_at(s: &str, index: usize, text: &str) -> String {
    let byte_index = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(index);

    match byte_index {
        Some(at) => {
            let mut out = String::with_capacity(s.len() + text.len());
            out.push_str(&s[..at]);
            out.push_str(text);
            out.push_str(&s[at..]);
            out
        }
        None => s.to_string(),
    }
}
