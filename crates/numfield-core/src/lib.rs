#![forbid(unsafe_code)]

//! Core algorithms for locale-aware numeric input reformatting.
//!
//! # Role
//! `numfield-core` is the pure layer: everything here operates on plain
//! strings and resolved locale symbols. It owns sanitization of raw edited
//! text, exact-digit grouping/formatting, and caret repositioning math.
//! There is no I/O and no widget type anywhere in this crate.
//!
//! # Primary responsibilities
//! - **NumberSymbols**: resolved decimal/grouping separators and grouping
//!   style for the bound locale.
//! - **Sanitizer**: raw edited string → canonical unformatted value plus a
//!   pending-fraction flag.
//! - **format_number**: canonical value → grouped, fraction-capped display
//!   string, exact-digit (no rounding, no floats).
//! - **reposition**: caret offset after an edit changed the string length.
//!
//! # How it fits in the system
//! `numfield-runtime` drives these pieces once per edit: it captures the
//! edit, applies local corrections, then sanitizes, formats, and repositions
//! the caret before committing back to the host field.

pub mod chars;
pub mod cursor;
pub mod format;
pub mod sanitize;
pub mod symbols;

pub use cursor::{CaretEdit, EditKind, reposition};
pub use format::format_number;
pub use sanitize::{Sanitized, Sanitizer};
pub use symbols::{GroupingStyle, NumberSymbols};
