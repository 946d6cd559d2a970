use std::collections::HashMap;
use std::sync::LazyLock;

use serde_derive::Serialize;

use crate::entities::CurrencySymbol;

/// Suggested donation amounts and symbol placement for one currency.
///
/// Amounts are whole currency units (not minor units), listed in display
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonationPreset {
    pub symbol: CurrencySymbol,
    pub amounts: &'static [u64],
}

const fn preset(symbol: CurrencySymbol, amounts: &'static [u64]) -> DonationPreset {
    DonationPreset { symbol, amounts }
}

static PRESETS: LazyLock<HashMap<&'static str, DonationPreset>> = LazyLock::new(|| {
    use CurrencySymbol::{After, Before, CurrencyCode};
    HashMap::from([
        ("USD", preset(Before("$"), &[3, 5, 10, 20, 50, 100])),
        ("AUD", preset(Before("A$"), &[5, 10, 15, 25, 65, 125])),
        ("BRL", preset(Before("R$"), &[15, 25, 50, 100, 250, 525])),
        ("GBP", preset(Before("£"), &[3, 5, 10, 15, 35, 70])),
        ("CAD", preset(Before("CA$"), &[5, 10, 15, 25, 60, 125])),
        ("CNY", preset(Before("CN¥"), &[20, 35, 65, 130, 320, 650])),
        ("EUR", preset(Before("€"), &[3, 5, 10, 15, 40, 80])),
        ("HKD", preset(Before("HK$"), &[25, 40, 80, 150, 400, 775])),
        ("INR", preset(Before("₹"), &[100, 200, 300, 500, 1_000, 5_000])),
        ("JPY", preset(Before("¥"), &[325, 550, 1_000, 2_200, 5_500, 11_000])),
        (
            "KRW",
            preset(Before("₩"), &[3_500, 5_500, 11_000, 22_500, 55_500, 100_000]),
        ),
        ("PLN", preset(After("zł"), &[10, 20, 40, 75, 150, 375])),
        ("SEK", preset(After("kr"), &[25, 50, 75, 150, 400, 800])),
        ("CHF", preset(CurrencyCode, &[3, 5, 10, 20, 50, 100])),
    ])
});

/// Full preset entry for the given currency code, if one exists.
///
/// Lookup is an exact, case-sensitive match on the ISO 4217 code.
pub fn preset_for(currency_code: &str) -> Option<&'static DonationPreset> {
    PRESETS.get(currency_code)
}

/// Symbol placement rule for the given currency code.
///
/// Codes without a preset entry fall back to `CurrencyCode` placement; this
/// is a total function, absence is not an error.
pub fn symbol_for(currency_code: &str) -> CurrencySymbol {
    preset_for(currency_code)
        .map(|preset| preset.symbol)
        .unwrap_or(CurrencySymbol::CurrencyCode)
}

/// Suggested donation amounts for the given currency code, in display order.
///
/// Empty for codes without a preset entry; no default amounts are invented.
pub fn amounts_for(currency_code: &str) -> &'static [u64] {
    preset_for(currency_code)
        .map(|preset| preset.amounts)
        .unwrap_or(&[])
}
