//! Keystroke driver: raw edits in, controller cycles out.
//!
//! The driver plays the host widget layer. For each simulated user action
//! it applies the raw edit to the [`ScriptedField`], moves the caret the
//! way a platform field would, then reports the edit to the controller —
//! which sanitizes, formats, and commits back into the same field.

use numfield_runtime::{EditNotice, FieldAdapter, FormattingResult, NumberInput};

use crate::field::ScriptedField;

/// Drives one [`NumberInput`] against one [`ScriptedField`].
#[derive(Debug)]
pub struct FieldDriver {
    field: ScriptedField,
    input: NumberInput,
}

impl FieldDriver {
    /// Bind a configured controller to a fresh field and run its setup.
    #[must_use]
    pub fn new(mut input: NumberInput) -> Self {
        let mut field = ScriptedField::new();
        input.setup(&mut field, false);
        Self { field, input }
    }

    /// Type one character at the caret.
    pub fn type_char(&mut self, c: char) -> Option<FormattingResult> {
        let start = self.field.caret();
        let mut buf = [0u8; 4];
        self.field.insert_at(start, c.encode_utf8(&mut buf));
        self.field.set_caret(start + 1);
        self.input
            .handle_edit(&mut self.field, EditNotice::insertion(start))
    }

    /// Type a string one keystroke at a time; returns the last cycle's
    /// result.
    pub fn type_str(&mut self, s: &str) -> Option<FormattingResult> {
        let mut last = None;
        for c in s.chars() {
            last = self.type_char(c);
        }
        last
    }

    /// Paste a string at the caret as one edit.
    pub fn paste(&mut self, s: &str) -> Option<FormattingResult> {
        let start = self.field.caret();
        let inserted = s.chars().count();
        self.field.insert_at(start, s);
        self.field.set_caret(start + inserted);
        self.input.handle_edit(
            &mut self.field,
            EditNotice {
                start,
                inserted,
                deleted: 0,
            },
        )
    }

    /// Backspace: delete the character before the caret.
    ///
    /// Returns `None` (no edit at all) when the caret is at 0.
    pub fn backspace(&mut self) -> Option<FormattingResult> {
        let caret = self.field.caret();
        if caret == 0 {
            return None;
        }
        let start = caret - 1;
        self.field.remove_range(start, caret);
        self.field.set_caret(start);
        self.input
            .handle_edit(&mut self.field, EditNotice::deletion(start))
    }

    /// Delete the character range `[start, end)` as one edit (a selection
    /// delete).
    pub fn delete_range(&mut self, start: usize, end: usize) -> Option<FormattingResult> {
        let deleted = end.saturating_sub(start);
        if deleted == 0 {
            return None;
        }
        self.field.remove_range(start, end);
        self.field.set_caret(start);
        self.input.handle_edit(
            &mut self.field,
            EditNotice {
                start,
                inserted: 0,
                deleted,
            },
        )
    }

    /// Move the caret the way a click would, prefix floor applied.
    pub fn move_caret(&mut self, pos: usize) {
        self.field.set_caret(pos);
        self.input.clamp_caret(&mut self.field);
    }

    /// Current field contents.
    #[must_use]
    pub fn text(&self) -> String {
        self.field.text()
    }

    /// Current caret offset.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.field.caret()
    }

    /// The controller, for listener registration in tests.
    pub fn input_mut(&mut self) -> &mut NumberInput {
        &mut self.input
    }
}
