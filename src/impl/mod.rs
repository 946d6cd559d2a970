// Crate-internal.
// ---

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod handlers;
        pub(crate) mod preset;
        pub(crate) mod symbol;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::preset::*;
        pub use crate::domain::entities::symbol::*;
    }

    pub use crate::presentation::amount_fmt::CurrencyFormatter;
}
