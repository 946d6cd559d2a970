use num_format::{Locale, ToFormattedString as _};
use rust_decimal::prelude::ToPrimitive as _;
use rust_decimal::Decimal;

use crate::entities::NumberFormatHandler;
use crate::errors::FormatError;

/// Plain decimal rendering with digit grouping and the locale's separators
/// (ex. 1,234,567.89), no currency adornment.
///
/// Defaults to the en locale for output that is stable across environments.
/// Rounds to `max_fraction_digits` with banker's rounding, then trims
/// trailing fraction zeros down to `min_fraction_digits`.
pub struct GroupedNumberFormat {
    locale: Locale,
}

impl GroupedNumberFormat {
    pub fn new() -> Self {
        Self { locale: Locale::en }
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Default for GroupedNumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberFormatHandler for GroupedNumberFormat {
    fn format_decimal(
        &self,
        value: Decimal,
        min_fraction_digits: u32,
        max_fraction_digits: u32,
    ) -> Result<String, FormatError> {
        let rounded = value.round_dp(max_fraction_digits);
        let magnitude = rounded.abs();
        let integer_part = magnitude
            .trunc()
            .to_i64()
            .ok_or(FormatError::UnrepresentableAmount(value))?
            .to_formatted_string(&self.locale);

        let mut fraction_digits = String::new();
        if max_fraction_digits > 0 {
            // After round_dp the fraction scaled by 10^max is exactly integral.
            let scale = 10u64
                .checked_pow(max_fraction_digits)
                .map(Decimal::from)
                .ok_or(FormatError::UnrepresentableAmount(value))?;
            let scaled = (magnitude.fract() * scale)
                .trunc()
                .to_u64()
                .ok_or(FormatError::UnrepresentableAmount(value))?;
            fraction_digits = format!("{:0width$}", scaled, width = max_fraction_digits as usize);
            while fraction_digits.len() > min_fraction_digits as usize
                && fraction_digits.ends_with('0')
            {
                fraction_digits.pop();
            }
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            self.locale.minus_sign()
        } else {
            ""
        };
        if fraction_digits.is_empty() {
            Ok(format!("{}{}", sign, integer_part))
        } else {
            Ok(format!(
                "{}{}{}{}",
                sign,
                integer_part,
                self.locale.decimal(),
                fraction_digits
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_thousands() {
        let fmt = GroupedNumberFormat::new();
        assert_eq!(fmt.format_decimal(dec!(1000), 0, 0).unwrap(), "1,000");
        assert_eq!(
            fmt.format_decimal(dec!(1234567.891), 2, 2).unwrap(),
            "1,234,567.89"
        );
    }

    #[test]
    fn exact_precision_pads_with_zeros() {
        let fmt = GroupedNumberFormat::new();
        assert_eq!(fmt.format_decimal(dec!(100.5), 2, 2).unwrap(), "100.50");
        assert_eq!(fmt.format_decimal(dec!(100), 2, 2).unwrap(), "100.00");
    }

    #[test]
    fn trims_trailing_zeros_down_to_minimum() {
        let fmt = GroupedNumberFormat::new();
        assert_eq!(fmt.format_decimal(dec!(1.50), 0, 2).unwrap(), "1.5");
        assert_eq!(fmt.format_decimal(dec!(1.00), 0, 2).unwrap(), "1");
        assert_eq!(fmt.format_decimal(dec!(1.05), 0, 2).unwrap(), "1.05");
    }

    #[test]
    fn rounds_to_max_fraction_digits() {
        let fmt = GroupedNumberFormat::new();
        assert_eq!(fmt.format_decimal(dec!(99.9), 0, 0).unwrap(), "100");
        assert_eq!(fmt.format_decimal(dec!(2.005), 2, 2).unwrap(), "2.00");
        assert_eq!(fmt.format_decimal(dec!(2.015), 2, 2).unwrap(), "2.02");
    }

    #[test]
    fn renders_negative_amounts() {
        let fmt = GroupedNumberFormat::new();
        assert_eq!(fmt.format_decimal(dec!(-100.5), 2, 2).unwrap(), "-100.50");
        assert_eq!(fmt.format_decimal(dec!(-0.25), 2, 2).unwrap(), "-0.25");
        assert_eq!(fmt.format_decimal(dec!(-1000), 0, 0).unwrap(), "-1,000");
    }

    #[test]
    fn fraction_digit_counts_beyond_u64_pow_are_an_error() {
        let fmt = GroupedNumberFormat::new();
        let value = dec!(1.5);
        assert_eq!(
            fmt.format_decimal(value, 0, 20),
            Err(FormatError::UnrepresentableAmount(value))
        );
        assert_eq!(
            fmt.format_decimal(value, 0, u32::MAX),
            Err(FormatError::UnrepresentableAmount(value))
        );
    }

    #[test]
    fn amounts_beyond_i64_are_an_error() {
        let fmt = GroupedNumberFormat::new();
        let huge = dec!(100000000000000000000);
        assert_eq!(
            fmt.format_decimal(huge, 0, 0),
            Err(FormatError::UnrepresentableAmount(huge))
        );
    }
}
