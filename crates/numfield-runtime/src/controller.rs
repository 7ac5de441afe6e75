//! The per-edit controller.
//!
//! One full cycle per user edit, always on the host's event thread:
//!
//! 1. **Begin** — capture the [`EditTransaction`] against the last
//!    committed text.
//! 2. **Classify** — delete when the field shrank, insert otherwise.
//! 3. **Local edit correction** — cascade a grouping-separator delete onto
//!    its neighboring digit; drop an insert that is disallowed at its
//!    position (second decimal separator, decimal right after a grouping
//!    separator, user-typed grouping separator); drop the last character
//!    when an insert pushed the fraction past its cap.
//! 4. **Sanitize + format** — canonical value, then grouped display unless
//!    the fraction is still being typed.
//! 5. **Reposition** — shift and clamp the caret.
//! 6. **Commit** — replace text and caret through the adapter while the
//!    reentrancy guard is held.
//! 7. **Notify** — at most one listener call per cycle, skipped while the
//!    value is pending.
//!
//! No state survives a cycle except the configuration and the committed
//! text snapshot.

use numfield_core::chars::{char_at, char_index_of, char_len, chars_after, remove_char_at};
use numfield_core::cursor::{CaretEdit, EditKind, reposition};
use numfield_core::format::format_number;
use numfield_core::sanitize::Sanitizer;

use crate::adapter::{EditNotice, FieldAdapter};
use crate::config::{FieldConfig, NumberInputBuilder};
use crate::transaction::EditTransaction;

/// Listener invoked once per committed cycle with the canonical value and
/// the prefixed display value.
pub type ChangeListener = Box<dyn FnMut(&str, &str)>;

/// Outcome of one committed edit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingResult {
    /// Canonical value: no prefix, no grouping, at most one decimal
    /// separator, optional leading sign.
    pub unformatted: String,
    /// Committed display value, currency prefix included.
    pub formatted: String,
    /// Committed caret offset.
    pub new_caret: usize,
}

/// Controller for one bound numeric input field.
///
/// Holds the immutable configuration, the last committed text, and the
/// reentrancy guard. Everything else is per-cycle.
pub struct NumberInput {
    config: FieldConfig,
    previous: String,
    reformatting: bool,
    listener: Option<ChangeListener>,
}

impl std::fmt::Debug for NumberInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberInput")
            .field("config", &self.config)
            .field("previous", &self.previous)
            .field("reformatting", &self.reformatting)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl NumberInput {
    /// Start configuring a controller.
    #[must_use]
    pub fn builder() -> NumberInputBuilder {
        NumberInputBuilder::new()
    }

    pub(crate) fn with_config(config: FieldConfig) -> Self {
        Self {
            config,
            previous: String::new(),
            reformatting: false,
            listener: None,
        }
    }

    /// The field configuration.
    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Characters the host should permit at the input layer.
    #[must_use]
    pub fn accepted_alphabet(&self) -> String {
        self.config.accepted_alphabet()
    }

    /// Register the change listener (replaces any previous one).
    pub fn on_change(&mut self, listener: impl FnMut(&str, &str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// One-time binding entry point.
    ///
    /// Optionally clears the field, writes the currency prefix ahead of any
    /// existing contents, and clamps the caret past the prefix.
    pub fn setup<A: FieldAdapter>(&mut self, field: &mut A, clear_field: bool) {
        if clear_field {
            field.set_text("");
        }
        let contents = field.text();
        let text = format!("{}{}", self.config.currency_prefix, contents);

        self.reformatting = true;
        field.set_text(&text);
        self.reformatting = false;

        self.previous = text;
        self.clamp_caret(field);
    }

    /// Re-apply the caret floor outside an edit cycle.
    ///
    /// The host calls this from whatever focus or pointer event moves the
    /// caret, so it can never come to rest inside the currency prefix.
    pub fn clamp_caret<A: FieldAdapter>(&self, field: &mut A) {
        if !self.config.has_prefix() {
            return;
        }
        let floor = self.config.prefix_len();
        if field.text().starts_with(&self.config.currency_prefix) && field.caret() < floor {
            field.set_caret(floor);
        }
    }

    /// Handle one user edit, synchronously to completion.
    ///
    /// Returns `None` when the cycle was suppressed (reentrancy guard held,
    /// or a no-op edit on an empty field); otherwise the committed result.
    pub fn handle_edit<A: FieldAdapter>(
        &mut self,
        field: &mut A,
        notice: EditNotice,
    ) -> Option<FormattingResult> {
        if self.reformatting {
            return None;
        }

        let decimal = self.config.symbols.decimal;
        let grouping = self.config.symbols.grouping;

        let new_text = field.text();
        let txn = EditTransaction::capture(&self.previous, &new_text, notice, decimal);
        let is_delete = txn.is_delete();

        tracing::trace!(
            start = txn.edit_start,
            inserted = txn.inserted_count,
            deleted = txn.deleted_count,
            previous_length = txn.previous_length,
            new_length = txn.new_length,
            "edit"
        );

        if !is_delete && txn.new_length == 0 {
            self.previous = new_text;
            return None;
        }

        let mut value = new_text;
        let mut start = txn.edit_start;

        if is_delete {
            // Deleting a grouping separator cascades onto the digit before
            // it, otherwise the regrouped text would resurrect the digit.
            if start > 0 && txn.char_adjacent_to_edit == Some(grouping) {
                value = remove_char_at(&value, start - 1);
                start -= 1;
            }
        } else {
            if let Some(inserted) = char_at(&value, start) {
                let not_allowed_here = (inserted == decimal
                    && (txn.had_decimal_separator_before
                        || txn.char_adjacent_to_edit == Some(grouping)))
                    || inserted == grouping;
                if not_allowed_here {
                    value = remove_char_at(&value, start);
                    if start > 0 {
                        start -= 1;
                    }
                }
            }

            if let Some(cap) = self.config.max_fraction_digits {
                if let Some(decimal_idx) = char_index_of(&value, decimal) {
                    if start > decimal_idx && chars_after(&value, decimal) > cap as usize {
                        let last = char_len(&value) - 1;
                        value = remove_char_at(&value, last);
                        if start == last {
                            start -= 1;
                        }
                    }
                }
            }
        }

        let sanitizer = Sanitizer::new(&self.config.symbols, &self.config.currency_prefix);
        let sanitized = sanitizer.run(&value);

        let body = if sanitized.pending_fraction || !self.config.format_output {
            sanitized.display.clone()
        } else {
            format_number(
                &sanitized.unformatted,
                &self.config.symbols,
                self.config.max_fraction_digits,
            )
        };
        let committed = format!("{}{}", self.config.currency_prefix, body);

        let new_caret = reposition(CaretEdit {
            kind: if is_delete {
                EditKind::Delete
            } else {
                EditKind::Insert
            },
            start,
            inserted: txn.inserted_count,
            raw_len: char_len(&value),
            formatted_len: char_len(&committed),
            prefix_len: self.config.prefix_len(),
        });

        self.reformatting = true;
        field.set_text(&committed);
        field.set_caret(new_caret);
        self.reformatting = false;

        self.previous = committed.clone();

        if !sanitized.pending_fraction {
            if let Some(listener) = self.listener.as_mut() {
                listener(&sanitized.unformatted, &committed);
            }
        }

        Some(FormattingResult {
            unformatted: sanitized.unformatted,
            formatted: committed,
            new_caret,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::LocaleNumerics;

    /// Minimal in-memory field for controller-level tests.
    #[derive(Debug, Default)]
    struct TestField {
        text: String,
        caret: usize,
    }

    impl FieldAdapter for TestField {
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
            self.caret = pos;
        }
    }

    fn plain_input() -> NumberInput {
        NumberInput::builder()
            .locale(LocaleNumerics::new('.', ',', "$"))
            .build()
            .unwrap()
    }

    /// Apply a raw edit to the field the way a host would, then run the
    /// controller.
    fn edit(
        input: &mut NumberInput,
        field: &mut TestField,
        new_text: &str,
        notice: EditNotice,
    ) -> Option<FormattingResult> {
        field.text = new_text.to_string();
        input.handle_edit(field, notice)
    }

    #[test]
    fn insert_formats_and_places_caret() {
        let mut input = plain_input();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "123", EditNotice { start: 0, inserted: 3, deleted: 0 });
        let result = edit(&mut input, &mut field, "1234", EditNotice::insertion(3)).unwrap();
        assert_eq!(result.formatted, "1,234");
        assert_eq!(field.text, "1,234");
        assert_eq!(field.caret, 5);
    }

    #[test]
    fn second_decimal_separator_dropped() {
        let mut input = plain_input();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "1.5", EditNotice { start: 0, inserted: 3, deleted: 0 });
        let result = edit(&mut input, &mut field, "1.5.", EditNotice::insertion(3)).unwrap();
        assert_eq!(result.formatted, "1.5");
        assert_eq!(field.caret, 3);
    }

    #[test]
    fn typed_grouping_separator_dropped() {
        let mut input = plain_input();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "12", EditNotice { start: 0, inserted: 2, deleted: 0 });
        let result = edit(&mut input, &mut field, "12,", EditNotice::insertion(2)).unwrap();
        assert_eq!(result.formatted, "12");
        assert_eq!(field.caret, 2);
    }

    #[test]
    fn decimal_after_grouping_separator_dropped() {
        let mut input = plain_input();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "1234", EditNotice { start: 0, inserted: 4, deleted: 0 });
        assert_eq!(field.text, "1,234");
        // Caret right after the ',' at offset 2; type '.'.
        let result = edit(&mut input, &mut field, "1,.234", EditNotice::insertion(2)).unwrap();
        assert_eq!(result.formatted, "1,234");
    }

    #[test]
    fn fraction_cap_rejects_at_keystroke() {
        let mut input = NumberInput::builder()
            .locale(LocaleNumerics::new('.', ',', "$"))
            .max_fraction_digits(2)
            .build()
            .unwrap();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "1.23", EditNotice { start: 0, inserted: 4, deleted: 0 });
        let result = edit(&mut input, &mut field, "1.239", EditNotice::insertion(4)).unwrap();
        assert_eq!(result.formatted, "1.23");
        assert_eq!(field.caret, 4);
    }

    #[test]
    fn reentrancy_guard_suppresses_cycle() {
        let mut input = plain_input();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        input.reformatting = true;
        let result = edit(&mut input, &mut field, "1", EditNotice::insertion(0));
        assert!(result.is_none());
        assert_eq!(field.text, "1"); // untouched by the controller
    }

    #[test]
    fn listener_called_once_per_commit() {
        let calls: Rc<RefCell<Vec<(String, String)>>> = Rc::default();
        let sink = Rc::clone(&calls);

        let mut input = plain_input();
        input.on_change(move |unformatted, formatted| {
            sink.borrow_mut()
                .push((unformatted.to_string(), formatted.to_string()));
        });
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "1234", EditNotice { start: 0, inserted: 4, deleted: 0 });
        assert_eq!(
            calls.borrow().as_slice(),
            &[("1234".to_string(), "1,234".to_string())]
        );
    }

    #[test]
    fn listener_suppressed_while_pending() {
        let calls: Rc<RefCell<Vec<(String, String)>>> = Rc::default();
        let sink = Rc::clone(&calls);

        let mut input = plain_input();
        input.on_change(move |unformatted, formatted| {
            sink.borrow_mut()
                .push((unformatted.to_string(), formatted.to_string()));
        });
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "12", EditNotice { start: 0, inserted: 2, deleted: 0 });
        edit(&mut input, &mut field, "12.", EditNotice::insertion(2));
        edit(&mut input, &mut field, "12.0", EditNotice::insertion(3));
        // Only the first edit commits a settled value.
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn unformatted_mode_keeps_digits_ungrouped() {
        let mut input = NumberInput::builder()
            .locale(LocaleNumerics::new('.', ',', "$"))
            .format_output(false)
            .build()
            .unwrap();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "1234", EditNotice { start: 0, inserted: 4, deleted: 0 });
        assert_eq!(field.text, "1234");
    }

    #[test]
    fn setup_writes_prefix_and_clamps_caret() {
        let mut input = NumberInput::builder()
            .locale(LocaleNumerics::new('.', ',', "$"))
            .show_currency(true)
            .build()
            .unwrap();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        assert_eq!(field.text, "$");
        assert_eq!(field.caret, 1);
    }

    #[test]
    fn setup_clear_field_resets_contents() {
        let mut input = NumberInput::builder()
            .locale(LocaleNumerics::new('.', ',', "$"))
            .show_currency(true)
            .build()
            .unwrap();
        let mut field = TestField {
            text: "stale".to_string(),
            caret: 0,
        };
        input.setup(&mut field, true);
        assert_eq!(field.text, "$");
    }

    #[test]
    fn setup_keeps_existing_contents() {
        let mut input = NumberInput::builder()
            .locale(LocaleNumerics::new('.', ',', "$"))
            .show_currency(true)
            .build()
            .unwrap();
        let mut field = TestField {
            text: "42".to_string(),
            caret: 0,
        };
        input.setup(&mut field, false);
        assert_eq!(field.text, "$42");
        assert_eq!(field.caret, 1);
    }

    #[test]
    fn clamp_caret_noop_without_prefix() {
        let input = plain_input();
        let mut field = TestField {
            text: "123".to_string(),
            caret: 0,
        };
        input.clamp_caret(&mut field);
        assert_eq!(field.caret, 0);
    }

    #[test]
    fn delete_to_empty_commits_empty() {
        let mut input = plain_input();
        let mut field = TestField::default();
        input.setup(&mut field, false);

        edit(&mut input, &mut field, "1", EditNotice::insertion(0));
        let result = edit(&mut input, &mut field, "", EditNotice::deletion(0)).unwrap();
        assert_eq!(result.formatted, "");
        assert_eq!(field.caret, 0);
    }

    mod proptests {
        use numfield_core::format::format_number;
        use numfield_core::symbols::NumberSymbols;
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn appended_digits_always_group(digits in "[1-9][0-9]{0,11}") {
                let mut input = plain_input();
                let mut field = TestField::default();
                input.setup(&mut field, false);

                for c in digits.chars() {
                    let caret = field.caret;
                    field.text.push(c);
                    input.handle_edit(&mut field, EditNotice::insertion(caret));
                }

                let expected =
                    format_number(&digits, &NumberSymbols::new('.', ','), None);
                prop_assert_eq!(&field.text, &expected);
                prop_assert_eq!(field.caret, field.text.chars().count());
            }
        }
    }
}
