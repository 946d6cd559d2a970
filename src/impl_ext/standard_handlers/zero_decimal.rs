use iso_currency::Currency;

use crate::entities::ZeroDecimalHandler;

/// Zero-decimal membership from the ISO 4217 minor-unit exponent
/// (ex. JPY = 0, USD = 2). Codes that are not valid ISO 4217 are treated as
/// having a minor unit.
pub struct IsoZeroDecimal;

impl ZeroDecimalHandler for IsoZeroDecimal {
    fn is_zero_decimal(&self, currency_code: &str) -> bool {
        Currency::from_code(currency_code).and_then(|currency| currency.exponent()) == Some(0)
    }
}

/// The zero-decimal set used by card payment processors. Differs from the
/// ISO exponent in a few spots: MGA and UGX are charged in whole units, and
/// ISK is charged with two decimals.
pub struct StripeZeroDecimal;

const STRIPE_ZERO_DECIMAL_CODES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND", "VUV",
    "XAF", "XOF", "XPF",
];

impl ZeroDecimalHandler for StripeZeroDecimal {
    fn is_zero_decimal(&self, currency_code: &str) -> bool {
        STRIPE_ZERO_DECIMAL_CODES.contains(&currency_code)
    }
}
