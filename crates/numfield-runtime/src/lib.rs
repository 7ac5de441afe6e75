#![forbid(unsafe_code)]

//! Per-keystroke orchestration for locale-aware numeric input.
//!
//! # Role
//! `numfield-runtime` binds the pure algorithms in `numfield-core` to one
//! host text field. It captures each edit as a transaction, applies the
//! local edit corrections (cascade delete, disallowed-insert drop, fraction
//! cap), runs sanitize/format/reposition, and commits the result back
//! through the [`FieldAdapter`] capability pair.
//!
//! # Primary responsibilities
//! - **NumberInput**: the controller; one full
//!   `Idle → Editing → Reformatting → Idle` cycle per edit.
//! - **EditTransaction**: the pre/post-edit diff, captured once per cycle.
//! - **FieldAdapter**: text + caret capabilities supplied by the host; the
//!   controller never sees a concrete widget type.
//! - **Builder**: one-time configuration against resolved locale values.
//!
//! # How it fits in the system
//! The host widget layer restricts input to
//! [`NumberInput::accepted_alphabet`], reports each edit via
//! [`NumberInput::handle_edit`], and receives the committed text and caret
//! through its own adapter. Listeners get the canonical/display value pair
//! once per committed cycle.

pub mod adapter;
pub mod config;
pub mod controller;
pub mod transaction;

pub use adapter::{EditNotice, FieldAdapter};
pub use config::{ConfigError, FieldConfig, LocaleNumerics, NumberInputBuilder};
pub use controller::{FormattingResult, NumberInput};
pub use transaction::EditTransaction;
