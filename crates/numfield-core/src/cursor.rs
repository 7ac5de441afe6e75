//! Caret repositioning after a reformatting pass changed the string length.

/// What kind of edit the user made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Characters were typed or pasted.
    Insert,
    /// Characters were removed.
    Delete,
}

/// Inputs to one caret repositioning, all in character offsets.
///
/// `start` is the edit offset after any local corrections (cascade delete,
/// disallowed-insert drop) already ran; `raw_len` is the length of the
/// corrected value immediately before formatting.
#[derive(Debug, Clone, Copy)]
pub struct CaretEdit {
    /// Insert or delete.
    pub kind: EditKind,
    /// Corrected edit start offset.
    pub start: usize,
    /// Characters inserted by the edit (0 for a delete).
    pub inserted: usize,
    /// Length of the corrected value before formatting.
    pub raw_len: usize,
    /// Length of the committed formatted value.
    pub formatted_len: usize,
    /// Length of the currency prefix (caret floor).
    pub prefix_len: usize,
}

/// Compute the committed caret position.
///
/// `start`, shifted by how much formatting grew or shrank the string,
/// advanced past whatever was inserted, then clamped to
/// `[prefix_len, formatted_len]` so the caret never enters the currency
/// prefix and never passes the end.
#[must_use]
pub fn reposition(edit: CaretEdit) -> usize {
    let advance = match edit.kind {
        EditKind::Insert => edit.inserted as isize,
        EditKind::Delete => 0,
    };
    let shifted = edit.start as isize + edit.formatted_len as isize - edit.raw_len as isize + advance;

    let floor = edit.prefix_len.min(edit.formatted_len);
    let pos = usize::try_from(shifted).unwrap_or(0);
    pos.clamp(floor, edit.formatted_len)
}
