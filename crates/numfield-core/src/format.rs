//! Exact-digit grouped rendering of a canonical numeric string.
//!
//! Formatting never goes through a float or a big-decimal parse: the typed
//! digits are regrouped as-is. The fraction part is truncated (never
//! rounded) to the effective cap, the integer part loses leading zeros and
//! gains grouping separators.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Empty string | Returned unchanged |
//! | Lone `-` or lone separator | Returned unchanged, debug-logged |
//! | Stray non-digit | Returned unchanged, debug-logged |
//!
//! A malformed fragment is a recoverable degradation: the caller keeps the
//! unformatted text for that cycle and the next keystroke gets another try.

use smallvec::SmallVec;

use crate::symbols::{GroupingStyle, NumberSymbols};

/// Render `unformatted` as a grouped display string.
///
/// The effective fraction cap is `max_fraction_digits` when set, otherwise
/// the number of fraction digits already present (so nothing is truncated
/// unless a cap was configured). Grouping separators already present in the
/// integer part are tolerated and re-derived, which makes formatting an
/// already-formatted value a no-op.
///
/// # Example
/// ```
/// use numfield_core::format::format_number;
/// use numfield_core::symbols::NumberSymbols;
///
/// let sym = NumberSymbols::new('.', ',');
/// assert_eq!(format_number("1234567.25", &sym, None), "1,234,567.25");
/// assert_eq!(format_number("1,234", &sym, None), "1,234");
/// assert_eq!(format_number("-", &sym, None), "-");
/// ```
#[must_use]
pub fn format_number(
    unformatted: &str,
    symbols: &NumberSymbols,
    max_fraction_digits: Option<u32>,
) -> String {
    if unformatted.is_empty() {
        return String::new();
    }
    match render(unformatted, symbols, max_fraction_digits) {
        Some(formatted) => formatted,
        None => {
            tracing::debug!(
                fragment = %unformatted,
                "unparseable numeric fragment left unformatted"
            );
            unformatted.to_string()
        }
    }
}

fn render(input: &str, symbols: &NumberSymbols, cap: Option<u32>) -> Option<String> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (int_raw, frac_raw) = match body.split_once(symbols.decimal) {
        Some((int, frac)) => (int, Some(frac)),
        None => (body, None),
    };

    // Integer part may carry grouping separators; anything else is a parse
    // failure. The fraction part must be bare digits.
    if !int_raw
        .chars()
        .all(|c| c.is_ascii_digit() || c == symbols.grouping)
    {
        return None;
    }
    let frac = frac_raw.unwrap_or("");
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let int_digits: String = int_raw.chars().filter(char::is_ascii_digit).collect();
    if int_digits.is_empty() && frac.is_empty() {
        return None;
    }

    let cap = cap.map_or(frac.len(), |n| n as usize);
    let frac_capped: String = frac.chars().take(cap).collect();

    let int_trimmed = int_digits.trim_start_matches('0');
    let int_normalized = if int_trimmed.is_empty() {
        "0"
    } else {
        int_trimmed
    };

    let mut out = String::with_capacity(input.len() + input.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_normalized, symbols));
    if !frac_capped.is_empty() {
        out.push(symbols.decimal);
        out.push_str(&frac_capped);
    }
    Some(out)
}

/// Insert grouping separators into a bare digit run, right to left.
fn group_digits(digits: &str, symbols: &NumberSymbols) -> String {
    let mut buf: SmallVec<[char; 32]> = SmallVec::new();
    let mut group = 0usize;
    let mut group_size = 3usize;
    for c in digits.chars().rev() {
        if group == group_size {
            buf.push(symbols.grouping);
            group = 0;
            if symbols.grouping_style == GroupingStyle::SouthAsian {
                group_size = 2;
            }
        }
        buf.push(c);
        group += 1;
    }
    buf.iter().rev().collect()
}
