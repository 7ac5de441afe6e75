//! Builder-style configuration against resolved locale values.
//!
//! The platform resolves the locale's separators and currency symbol; the
//! builder consumes them as plain values. Misconfiguration is fatal at
//! `build()` time — nothing is deferred to the first keystroke.

use numfield_core::chars::char_len;
use numfield_core::symbols::NumberSymbols;

use crate::controller::NumberInput;

/// Resolved numeric conventions for one locale: separators plus the
/// locale-derived currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleNumerics {
    /// Decimal and grouping separators, grouping style.
    pub symbols: NumberSymbols,
    /// The locale's currency symbol (used when no explicit currency string
    /// is configured).
    pub currency_symbol: String,
}

impl LocaleNumerics {
    /// Bundle resolved locale values.
    #[must_use]
    pub fn new(decimal: char, grouping: char, currency_symbol: impl Into<String>) -> Self {
        Self {
            symbols: NumberSymbols::new(decimal, grouping),
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Override the grouping style.
    #[must_use]
    pub fn with_symbols(mut self, symbols: NumberSymbols) -> Self {
        self.symbols = symbols;
        self
    }
}

/// Errors surfaced at configuration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No locale values were supplied to the builder.
    MissingLocale,
    /// Decimal and grouping separators resolved to the same character.
    SeparatorClash(char),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLocale => write!(f, "no locale numerics supplied"),
            Self::SeparatorClash(c) => {
                write!(f, "decimal and grouping separators are both {c:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable per-field configuration, fixed for the life of a binding.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Resolved separators and grouping style.
    pub symbols: NumberSymbols,
    /// Literal leading currency string (empty for none).
    pub currency_prefix: String,
    /// Whether display output is grouped at all.
    pub format_output: bool,
    /// Optional cap on fraction digits.
    pub max_fraction_digits: Option<u32>,
}

impl FieldConfig {
    /// Characters the host should permit at the input layer.
    #[must_use]
    pub fn accepted_alphabet(&self) -> String {
        self.symbols.accepted_alphabet()
    }

    /// Caret floor: length of the currency prefix in characters.
    #[inline]
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        char_len(&self.currency_prefix)
    }

    /// Whether a currency prefix is configured.
    #[inline]
    #[must_use]
    pub fn has_prefix(&self) -> bool {
        !self.currency_prefix.is_empty()
    }
}

/// Builder for [`NumberInput`].
///
/// # Example
/// ```
/// use numfield_runtime::{LocaleNumerics, NumberInput};
///
/// let input = NumberInput::builder()
///     .locale(LocaleNumerics::new('.', ',', "$"))
///     .show_currency(true)
///     .max_fraction_digits(2)
///     .build()
///     .unwrap();
/// assert_eq!(input.config().currency_prefix, "$");
/// ```
#[derive(Debug, Clone)]
pub struct NumberInputBuilder {
    locale: Option<LocaleNumerics>,
    format_output: bool,
    show_currency: bool,
    currency_string: Option<String>,
    max_fraction_digits: Option<u32>,
}

impl Default for NumberInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberInputBuilder {
    /// Start a builder with defaults: format on, currency off, no cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locale: None,
            format_output: true,
            show_currency: false,
            currency_string: None,
            max_fraction_digits: None,
        }
    }

    /// Supply the resolved locale values. Required.
    #[must_use]
    pub fn locale(mut self, locale: LocaleNumerics) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Whether to group the display output (default true).
    #[must_use]
    pub fn format_output(mut self, on: bool) -> Self {
        self.format_output = on;
        self
    }

    /// Whether to prefix the field with a currency string (default false).
    #[must_use]
    pub fn show_currency(mut self, on: bool) -> Self {
        self.show_currency = on;
        self
    }

    /// Explicit currency string; defaults to the locale-derived symbol.
    /// Only takes effect together with [`Self::show_currency`].
    #[must_use]
    pub fn currency_string(mut self, s: impl Into<String>) -> Self {
        self.currency_string = Some(s.into());
        self
    }

    /// Cap the number of fraction digits (default unbounded).
    #[must_use]
    pub fn max_fraction_digits(mut self, n: u32) -> Self {
        self.max_fraction_digits = Some(n);
        self
    }

    /// Validate and build the controller.
    ///
    /// # Errors
    /// [`ConfigError::MissingLocale`] when no locale was supplied,
    /// [`ConfigError::SeparatorClash`] when both separators resolved to the
    /// same character.
    pub fn build(self) -> Result<NumberInput, ConfigError> {
        let locale = self.locale.ok_or(ConfigError::MissingLocale)?;
        if locale.symbols.decimal == locale.symbols.grouping {
            return Err(ConfigError::SeparatorClash(locale.symbols.decimal));
        }

        let currency_prefix = if self.show_currency {
            // ASCII trim only: a no-break space inside a symbol like
            // "NGN\u{a0}" is part of the prefix, not padding.
            self.currency_string
                .unwrap_or(locale.currency_symbol)
                .trim_matches(|c: char| c.is_ascii_whitespace())
                .to_string()
        } else {
            String::new()
        };

        Ok(NumberInput::with_config(FieldConfig {
            symbols: locale.symbols,
            currency_prefix,
            format_output: self.format_output,
            max_fraction_digits: self.max_fraction_digits,
        }))
    }
}
