//! In-memory text field with a caret.

use numfield_core::chars::char_len;
use numfield_runtime::FieldAdapter;

/// A scripted stand-in for a platform text field.
///
/// Stores text and a caret in character offsets and exposes raw edit
/// helpers for the driver. It never talks to the controller on its own;
/// the driver decides when an edit is reported.
#[derive(Debug, Clone, Default)]
pub struct ScriptedField {
    text: String,
    caret: usize,
}

impl ScriptedField {
    /// An empty field with the caret at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `s` at character offset `idx` (raw edit, no notification).
    pub fn insert_at(&mut self, idx: usize, s: &str) {
        let idx = idx.min(char_len(&self.text));
        let mut out = String::with_capacity(self.text.len() + s.len());
        for (i, c) in self.text.chars().enumerate() {
            if i == idx {
                out.push_str(s);
            }
            out.push(c);
        }
        if idx >= char_len(&self.text) {
            out.push_str(s);
        }
        self.text = out;
    }

    /// Remove the character range `[start, end)` (raw edit).
    pub fn remove_range(&mut self, start: usize, end: usize) {
        self.text = self
            .text
            .chars()
            .enumerate()
            .filter(|&(i, _)| i < start || i >= end)
            .map(|(_, c)| c)
            .collect();
    }

    /// Character length of the contents.
    #[must_use]
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl FieldAdapter for ScriptedField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, pos: usize) {
        self.caret = pos.min(char_len(&self.text));
    }
}
