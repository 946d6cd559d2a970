use serde_derive::Serialize;

/// Where a currency's display glyph sits relative to the formatted number.
///
/// `Before` and `After` attach the glyph directly, with no separator.
/// `CurrencyCode` has no glyph at all; the ISO code itself is used, separated
/// from the number by a single space (ex. "CHF 5").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CurrencySymbol {
    Before(&'static str),
    After(&'static str),
    CurrencyCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_glyph_payload() {
        assert_eq!(
            serde_json::to_value(CurrencySymbol::Before("$")).unwrap(),
            serde_json::json!({ "Before": "$" })
        );
        assert_eq!(
            serde_json::to_value(CurrencySymbol::After("zł")).unwrap(),
            serde_json::json!({ "After": "zł" })
        );
        assert_eq!(
            serde_json::to_value(CurrencySymbol::CurrencyCode).unwrap(),
            serde_json::json!("CurrencyCode")
        );
    }
}
