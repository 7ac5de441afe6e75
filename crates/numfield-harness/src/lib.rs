#![forbid(unsafe_code)]

//! Deterministic test harness for numeric input.
//!
//! A scripted in-memory field plus a keystroke driver, so the full
//! edit → sanitize → format → reposition → commit cycle can be exercised
//! end to end without any UI. Every scenario is a plain function call
//! sequence; nothing here is time- or platform-dependent.

pub mod driver;
pub mod field;

pub use driver::FieldDriver;
pub use field::ScriptedField;
