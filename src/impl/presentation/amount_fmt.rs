use rust_decimal::prelude::ToPrimitive as _;
use rust_decimal::Decimal;

use crate::entities::{symbol_for, CurrencySymbol, NumberFormatHandler, ZeroDecimalHandler};

/// Renders monetary amounts for display.
///
/// Holds the two host-supplied collaborators: the zero-decimal currency
/// lookup and the plain-decimal number renderer. Formatting itself is pure;
/// repeated calls with the same inputs yield the same string.
pub struct CurrencyFormatter<Z, N>
where
    Z: ZeroDecimalHandler,
    N: NumberFormatHandler,
{
    zero_decimal: Z,
    number_format: N,
}

impl<Z, N> CurrencyFormatter<Z, N>
where
    Z: ZeroDecimalHandler,
    N: NumberFormatHandler,
{
    pub fn new(zero_decimal: Z, number_format: N) -> Self {
        Self {
            zero_decimal,
            number_format,
        }
    }

    /// Format an amount in the given currency.
    ///
    /// Zero-decimal currencies and whole-number amounts render with no
    /// fraction digits; everything else renders with exactly two. With
    /// `include_symbol`, the symbol placement rule for the code is applied
    /// (unknown codes fall back to "CODE 123" form).
    ///
    /// Never fails: if the number renderer cannot produce a string, the raw
    /// decimal representation of the value is used instead.
    pub fn format_currency(
        &self,
        value: Decimal,
        currency_code: &str,
        include_symbol: bool,
    ) -> String {
        let decimal_places = self.decimal_places(value, currency_code);
        let value_string = self
            .number_format
            .format_decimal(value, decimal_places, decimal_places)
            .unwrap_or_else(|_| value.to_string());

        if !include_symbol {
            return value_string;
        }

        match symbol_for(currency_code) {
            CurrencySymbol::Before(symbol) => format!("{}{}", symbol, value_string),
            CurrencySymbol::After(symbol) => format!("{}{}", value_string, symbol),
            CurrencySymbol::CurrencyCode => format!("{} {}", currency_code, value_string),
        }
    }

    fn decimal_places(&self, value: Decimal, currency_code: &str) -> u32 {
        if self.zero_decimal.is_zero_decimal(currency_code) {
            return 0;
        }
        // The whole-number check runs in double precision, so amounts above
        // 2^53 can report as whole even when they carry a fraction.
        let as_double = value.to_f64().unwrap_or(f64::NAN);
        if as_double == as_double.trunc() {
            0
        } else {
            2
        }
    }
}
