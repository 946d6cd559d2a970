use rust_decimal::Decimal;

use crate::errors::FormatError;

// Currency metadata handlers.
// ---

/// Membership test against a list of currencies with no minor subunit
/// (ex. JPY, KRW). The list is maintained outside this crate; see
/// `ext::standard_handlers` for ready-made implementations.
pub trait ZeroDecimalHandler {
    fn is_zero_decimal(&self, currency_code: &str) -> bool;
}

// Number rendering handlers.
// ---

/// Plain decimal rendering of a numeric value: digit grouping and decimal
/// separator only, no currency adornment.
pub trait NumberFormatHandler {
    fn format_decimal(
        &self,
        value: Decimal,
        min_fraction_digits: u32,
        max_fraction_digits: u32,
    ) -> Result<String, FormatError>;
}
