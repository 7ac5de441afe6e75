//! Character-indexed string helpers.
//!
//! Caret offsets are character (Unicode scalar) counts, never bytes; a
//! grouping separator such as `\u{202f}` or a currency prefix such as `"₦"`
//! is multi-byte but one caret position. The strings involved are a few
//! dozen characters at most, so linear scans are fine.

/// Length of `s` in characters.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Character of `s` at character index `idx`, if in range.
#[inline]
#[must_use]
pub fn char_at(s: &str, idx: usize) -> Option<char> {
    s.chars().nth(idx)
}

/// Character index of the first occurrence of `target` in `s`.
#[inline]
#[must_use]
pub fn char_index_of(s: &str, target: char) -> Option<usize> {
    s.chars().position(|c| c == target)
}

/// Copy of `s` with the character at index `idx` removed.
///
/// Out-of-range indices return `s` unchanged.
#[must_use]
pub fn remove_char_at(s: &str, idx: usize) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if i != idx {
            out.push(c);
        }
    }
    out
}

/// Number of characters after the first occurrence of `separator`.
///
/// Returns 0 when `separator` is absent or is the last character.
#[must_use]
pub fn chars_after(s: &str, separator: char) -> usize {
    match char_index_of(s, separator) {
        Some(idx) => char_len(s) - idx - 1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("1\u{202f}234"), 5);
        assert_eq!(char_len("₦500"), 4);
    }

    #[test]
    fn char_at_in_and_out_of_range() {
        assert_eq!(char_at("ab", 1), Some('b'));
        assert_eq!(char_at("ab", 2), None);
        assert_eq!(char_at("", 0), None);
    }

    #[test]
    fn remove_char_at_mid_and_out_of_range() {
        assert_eq!(remove_char_at("1,234", 1), "1234");
        assert_eq!(remove_char_at("12", 5), "12");
        assert_eq!(remove_char_at("", 0), "");
    }

    #[test]
    fn chars_after_separator() {
        assert_eq!(chars_after("12.345", '.'), 3);
        assert_eq!(chars_after("12.", '.'), 0);
        assert_eq!(chars_after("12", '.'), 0);
        // First occurrence wins when a paste slipped a second one in.
        assert_eq!(chars_after("1.2.3", '.'), 3);
    }
}
