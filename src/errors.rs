use rust_decimal::Decimal;
use thiserror::Error;

// Number-rendering-related.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("amount '{0}' is outside the range the grouped renderer supports")]
    UnrepresentableAmount(Decimal),
}
