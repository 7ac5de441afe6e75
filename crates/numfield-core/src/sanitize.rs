//! Raw edit text → canonical unformatted value.
//!
//! One user edit can leave anything in the field: the currency prefix,
//! characters the soft keyboard let through, a second decimal separator, a
//! misplaced sign. [`Sanitizer::run`] normalizes all of it in a fixed order.
//!
//! # Invariants
//!
//! 1. **At most one decimal separator** survives; when several occur, the
//!    last-typed one wins and earlier ones are removed.
//!
//! 2. **`-` only at index 0**; any other occurrence is removed.
//!
//! 3. **The prefix is matched literally**: `"$"`, `"C$("`, or any other
//!    string a locale produces is plain text, never a pattern.
//!
//! 4. **No grouping separator touches the decimal separator**: deleting
//!    the digits between them would otherwise leave `1,.50`.
//!
//! 5. **`unformatted` carries no grouping separators.**
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Empty string | Empty result, not pending |
//! | Only disallowed characters | Empty result |
//! | Trailing decimal separator | `pending_fraction` set |
//! | Fraction ending in `0` | `pending_fraction` set |

use crate::symbols::NumberSymbols;

/// Result of sanitizing one raw edited string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Prefix-stripped value with grouping separators left where they were.
    pub display: String,
    /// Canonical value: optional leading `-`, digits, at most one decimal
    /// separator, no grouping.
    pub unformatted: String,
    /// The fraction part is still being typed (trailing separator or
    /// trailing zeros); formatting and notification hold off this cycle.
    pub pending_fraction: bool,
}

/// Normalizes raw edited text against one locale's symbols and prefix.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer<'a> {
    symbols: &'a NumberSymbols,
    currency_prefix: &'a str,
}

impl<'a> Sanitizer<'a> {
    /// Create a sanitizer for the given symbols and literal currency prefix
    /// (empty string for none).
    #[must_use]
    pub fn new(symbols: &'a NumberSymbols, currency_prefix: &'a str) -> Self {
        Self {
            symbols,
            currency_prefix,
        }
    }

    /// Sanitize one raw edited string.
    ///
    /// Steps, in order: strip the literal prefix, collapse non-leading `-`,
    /// keep only the last decimal separator, drop disallowed characters,
    /// then derive the grouping-free canonical value.
    #[must_use]
    pub fn run(&self, raw: &str) -> Sanitized {
        let mut value = if self.currency_prefix.is_empty() {
            raw.to_string()
        } else {
            raw.replace(self.currency_prefix, "")
        };
        value = resolve_sign(&value);
        value = resolve_decimals(&value, self.symbols.decimal);
        value = remove_disallowed(&value, self.symbols);
        value = resolve_separator_adjacency(&value, self.symbols);

        let unformatted: String = value
            .chars()
            .filter(|&c| c != self.symbols.grouping)
            .collect();
        let pending_fraction = pending_fraction(&unformatted, self.symbols.decimal);

        Sanitized {
            display: value,
            unformatted,
            pending_fraction,
        }
    }
}

/// Keep `-` only at index 0.
fn resolve_sign(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .filter(|&(i, c)| c != '-' || i == 0)
        .map(|(_, c)| c)
        .collect()
}

/// Keep the last-occurring decimal separator, removing earlier ones.
fn resolve_decimals(input: &str, decimal: char) -> String {
    let Some(last) = input
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == decimal)
        .map(|(i, _)| i)
        .last()
    else {
        return input.to_string();
    };
    input
        .chars()
        .enumerate()
        .filter(|&(i, c)| c != decimal || i >= last)
        .map(|(_, c)| c)
        .collect()
}

/// Drop everything outside the accepted alphabet; `-` stays only when the
/// earlier sign pass left it at index 0.
fn remove_disallowed(input: &str, symbols: &NumberSymbols) -> String {
    input
        .chars()
        .enumerate()
        .filter(|&(i, c)| {
            if c == '-' {
                i == 0
            } else {
                c.is_ascii_digit() || c == symbols.decimal || c == symbols.grouping
            }
        })
        .map(|(_, c)| c)
        .collect()
}

/// Drop any grouping separator left adjacent to the decimal separator
/// (deleting `234` out of `1,234.50` strands the `,` against the `.`).
fn resolve_separator_adjacency(input: &str, symbols: &NumberSymbols) -> String {
    let chars: Vec<char> = input.chars().collect();
    let Some(decimal_idx) = chars.iter().position(|&c| c == symbols.decimal) else {
        return input.to_string();
    };
    // Whole runs of grouping separators on either side go at once.
    let mut lo = decimal_idx;
    while lo > 0 && chars[lo - 1] == symbols.grouping {
        lo -= 1;
    }
    let mut hi = decimal_idx + 1;
    while hi < chars.len() && chars[hi] == symbols.grouping {
        hi += 1;
    }
    chars
        .iter()
        .enumerate()
        .filter(|&(i, _)| i == decimal_idx || i < lo || i >= hi)
        .map(|(_, &c)| c)
        .collect()
}

/// A value ending in the decimal separator, or whose fraction ends in `0`,
/// is still being typed.
fn pending_fraction(unformatted: &str, decimal: char) -> bool {
    if unformatted.ends_with(decimal) {
        return true;
    }
    unformatted.contains(decimal) && unformatted.ends_with('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberSymbols {
        NumberSymbols::new('.', ',')
    }

    fn run(raw: &str) -> Sanitized {
        let sym = en();
        Sanitizer::new(&sym, "").run(raw)
    }

    #[test]
    fn passthrough_clean_value() {
        let s = run("1,234.5");
        assert_eq!(s.display, "1,234.5");
        assert_eq!(s.unformatted, "1234.5");
        assert!(!s.pending_fraction);
    }

    #[test]
    fn strips_prefix_literally() {
        let sym = en();
        let s = Sanitizer::new(&sym, "$").run("$1,234");
        assert_eq!(s.unformatted, "1234");
        // A prefix full of pattern metacharacters is still plain text.
        let s = Sanitizer::new(&sym, "C$(").run("C$(500");
        assert_eq!(s.unformatted, "500");
    }

    #[test]
    fn strips_every_prefix_occurrence() {
        let sym = en();
        let s = Sanitizer::new(&sym, "$").run("$12$34");
        assert_eq!(s.unformatted, "1234");
    }

    #[test]
    fn non_leading_signs_removed() {
        assert_eq!(run("-12-3").unformatted, "-123");
        assert_eq!(run("1-23").unformatted, "123");
        assert_eq!(run("--5").unformatted, "-5");
    }

    #[test]
    fn last_decimal_wins() {
        assert_eq!(run("1.2.3").unformatted, "12.3");
        assert_eq!(run("1.2.3.4").unformatted, "123.4");
    }

    #[test]
    fn disallowed_characters_dropped() {
        assert_eq!(run("1a2b3").unformatted, "123");
        assert_eq!(run("abc").unformatted, "");
    }

    #[test]
    fn sign_surviving_junk_stays_leading() {
        // The '-' ends up at index 0 of the output after junk is removed.
        assert_eq!(run("-a12").unformatted, "-12");
    }

    #[test]
    fn grouping_kept_in_display_dropped_in_unformatted() {
        let s = run("1,23,4");
        assert_eq!(s.display, "1,23,4");
        assert_eq!(s.unformatted, "1234");
    }

    #[test]
    fn orphaned_grouping_next_to_decimal_dropped() {
        assert_eq!(run("1,.50").display, "1.50");
        assert_eq!(run("1.,50").display, "1.50");
        // Grouping separators between digits are untouched.
        assert_eq!(run("1,234.50").display, "1,234.50");
    }

    #[test]
    fn trailing_decimal_is_pending() {
        assert!(run("12.").pending_fraction);
        assert!(!run("12").pending_fraction);
    }

    #[test]
    fn trailing_fraction_zeros_are_pending() {
        assert!(run("12.50").pending_fraction);
        assert!(run("12.0").pending_fraction);
        assert!(!run("12.05").pending_fraction);
    }

    #[test]
    fn empty_input() {
        let s = run("");
        assert_eq!(s.display, "");
        assert_eq!(s.unformatted, "");
        assert!(!s.pending_fraction);
    }

    #[test]
    fn comma_decimal_locale() {
        let sym = NumberSymbols::new(',', '.');
        let s = Sanitizer::new(&sym, "").run("1.234,5");
        assert_eq!(s.unformatted, "1234,5");
        assert!(!s.pending_fraction);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn at_most_one_decimal(raw in "[-0-9.,a-z]{0,24}") {
                let s = run(&raw);
                prop_assert!(s.unformatted.matches('.').count() <= 1);
            }

            #[test]
            fn sign_only_at_index_zero(raw in "[-0-9.,]{0,24}") {
                let s = run(&raw);
                for (i, c) in s.unformatted.chars().enumerate() {
                    if c == '-' {
                        prop_assert_eq!(i, 0);
                    }
                }
            }

            #[test]
            fn unformatted_never_contains_grouping(raw in "[-0-9.,]{0,24}") {
                let s = run(&raw);
                prop_assert!(!s.unformatted.contains(','));
            }

            #[test]
            fn idempotent_on_own_output(raw in "[-0-9.,x]{0,24}") {
                let first = run(&raw);
                let second = run(&first.display);
                prop_assert_eq!(first, second);
            }
        }
    }
}
