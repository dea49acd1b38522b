//! Error types for the junction core library.
//!
//! Defines the error enum exposed by the forest builders and a convenient
//! result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by the forest builders.
///
/// Every variant describes a structural property of the input, so retrying
/// the same call yields the same error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// More components were requested than exist after the connection budget
    /// was spent.
    #[error("cannot pick {pick} components when only {components} exist")]
    PickExceedsComponents {
        /// Number of components the caller asked to multiply.
        pick: usize,
        /// Number of distinct components present after the loop.
        components: usize,
    },
    /// The edge stream ran dry before the forest became a single tree.
    #[error("point set is disconnected: {components} components remain after {merges} merges")]
    Disconnected {
        /// Components left when the edges were exhausted.
        components: usize,
        /// Successful merges performed before exhaustion.
        merges: usize,
    },
    /// Spanning requires at least two points so a completing edge exists.
    #[error("spanning requires at least 2 points (got {points})")]
    InsufficientPoints {
        /// Number of points supplied by the caller.
        points: usize,
    },
    /// The product of the largest component sizes does not fit in a `u64`.
    #[error("product of the {pick} largest component sizes overflows u64")]
    ProductOverflow {
        /// Number of components being multiplied.
        pick: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// More components were requested than exist.
        PickExceedsComponents => PickExceedsComponents { .. } => "FOREST_PICK_EXCEEDS_COMPONENTS",
        /// The edge stream ran dry before the forest became a single tree.
        Disconnected => Disconnected { .. } => "FOREST_DISCONNECTED",
        /// Spanning requires at least two points.
        InsufficientPoints => InsufficientPoints { .. } => "FOREST_INSUFFICIENT_POINTS",
        /// The component-size product overflowed.
        ProductOverflow => ProductOverflow { .. } => "FOREST_PRODUCT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
