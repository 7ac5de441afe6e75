//! One edit, captured as a value.
//!
//! The platform's change-notification triplet (pre-edit snapshot, post-edit
//! diff, post-commit hook) collapses into a single [`EditTransaction`]
//! carrying exactly the diff fields the controller needs. It lives for one
//! synchronous edit cycle and is discarded.

use numfield_core::chars::{char_at, char_len};

use crate::adapter::EditNotice;

/// Pre/post-edit state of one user edit, in character offsets.
#[derive(Debug, Clone, Copy)]
pub struct EditTransaction<'a> {
    /// Field contents before the edit (as last committed).
    pub previous_text: &'a str,
    /// Character length of `previous_text`.
    pub previous_length: usize,
    /// Character length after the edit.
    pub new_length: usize,
    /// Character offset of the edit.
    pub edit_start: usize,
    /// Characters the edit inserted.
    pub inserted_count: usize,
    /// Characters the edit deleted.
    pub deleted_count: usize,
    /// For a delete: the first deleted character. For an insert: the
    /// character immediately before the insertion point, if any.
    pub char_adjacent_to_edit: Option<char>,
    /// Whether the pre-edit text already contained the decimal separator.
    pub had_decimal_separator_before: bool,
}

impl<'a> EditTransaction<'a> {
    /// Capture a transaction from the previously committed text, the
    /// post-edit text, and the host's edit notice.
    #[must_use]
    pub fn capture(
        previous_text: &'a str,
        new_text: &str,
        notice: EditNotice,
        decimal: char,
    ) -> Self {
        let previous_length = char_len(previous_text);
        let new_length = char_len(new_text);
        let is_delete = new_length < previous_length;

        let char_adjacent_to_edit = if is_delete {
            char_at(previous_text, notice.start)
        } else if notice.start > 0 {
            char_at(previous_text, notice.start - 1)
        } else {
            None
        };

        Self {
            previous_text,
            previous_length,
            new_length,
            edit_start: notice.start,
            inserted_count: notice.inserted,
            deleted_count: notice.deleted,
            char_adjacent_to_edit,
            had_decimal_separator_before: previous_text.contains(decimal),
        }
    }

    /// Whether the edit shrank the field (the delete classification).
    #[inline]
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.new_length < self.previous_length
    }
}
