//! Error types for price correction
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Failures surfaced by the pricing core.
///
/// All of these are input problems: the algorithm itself is total on
/// validated inputs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    #[error("VAT rate {value} is outside the allowed range 0..=99")]
    VatRateOutOfRange { value: u8 },

    #[error("price must be non-negative")]
    NegativePrice,

    #[error("price magnitude exceeds the exact-decimal range")]
    Overflow,
}
