use crate::ext::standard_handlers::{GroupedNumberFormat, IsoZeroDecimal};
use crate::CurrencyFormatter;

/// `CurrencyFormatter` wired with the standard handlers: ISO 4217
/// zero-decimal lookup and en-locale grouped rendering.
pub type StandardCurrencyFormatter = CurrencyFormatter<IsoZeroDecimal, GroupedNumberFormat>;

pub fn standard_formatter() -> StandardCurrencyFormatter {
    CurrencyFormatter::new(IsoZeroDecimal, GroupedNumberFormat::new())
}
