// Crate-internal.
// ---

pub(crate) mod standard_handlers {
    pub(crate) mod formatter;
    pub(crate) mod number_format;
    pub(crate) mod zero_decimal;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_handlers {
        pub use crate::impl_ext::standard_handlers::formatter::*;
        pub use crate::impl_ext::standard_handlers::number_format::*;
        pub use crate::impl_ext::standard_handlers::zero_decimal::*;
    }
}
