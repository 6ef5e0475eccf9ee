//! Price correction on the VAT discretization grid
//!
//! Valid net prices are `m * step / 100` for integer `m` (see
//! [`VatRate::grid_step`]); the induced gross prices
//! `m * step * (100 + p) / 10000` form a uniform grid. Correction picks,
//! between the two grid neighbours of the requested gross price, the one
//! with the smaller absolute error. Absolute error is convex around the
//! ideal grid index, so no other grid point can beat those two.
//!
//! All intermediate arithmetic stays in `Decimal` (96-bit mantissa, 28-29
//! significant digits); the divisions in the candidate computation are
//! exact by the gcd construction of the step.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::PricingError;
use crate::vat::VatRate;

/// Corrected price pair.
///
/// Both components carry exactly two fractional digits and satisfy
/// `with_vat == round2(without_vat * (100 + p) / 100)` by construction.
/// Decimals serialize as strings, keeping the wire format exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub with_vat: Decimal,
    pub without_vat: Decimal,
}

/// Correct a requested gross price to the nearest grid-representable one.
///
/// Ties break toward the lower candidate. The input must be non-negative;
/// the rate is already range-validated by [`VatRate::new`].
pub fn correct_price(input: Decimal, rate: VatRate) -> Result<PriceQuote, PricingError> {
    if input.is_sign_negative() && !input.is_zero() {
        return Err(PricingError::NegativePrice);
    }

    // Gross grid spacing, scaled by 10000: step * (100 + p).
    let gross_step = Decimal::from(rate.grid_step() * rate.gross_numerator());

    // Ideal (real-valued) grid index m = input * 10000 / (step * (100 + p)).
    let m_ideal = input
        .checked_mul(TEN_THOUSAND)
        .and_then(|scaled| scaled.checked_div(gross_step))
        .ok_or(PricingError::Overflow)?;
    let m_floor = m_ideal.floor();

    let floor_quote = quote_at(m_floor, rate)?;
    let ceil_quote = quote_at(m_floor + Decimal::ONE, rate)?;

    let floor_err = floor_quote
        .with_vat
        .checked_sub(input)
        .ok_or(PricingError::Overflow)?
        .abs();
    let ceil_err = ceil_quote
        .with_vat
        .checked_sub(input)
        .ok_or(PricingError::Overflow)?
        .abs();

    // Floor wins ties.
    if floor_err <= ceil_err {
        Ok(floor_quote)
    } else {
        Ok(ceil_quote)
    }
}

const TEN_THOUSAND: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Evaluate the grid point at index `m`.
fn quote_at(m: Decimal, rate: VatRate) -> Result<PriceQuote, PricingError> {
    let step = Decimal::from(rate.grid_step());
    let gross_step = Decimal::from(rate.grid_step() * rate.gross_numerator());

    let with_vat = m
        .checked_mul(gross_step)
        .and_then(|scaled| scaled.checked_div(TEN_THOUSAND))
        .ok_or(PricingError::Overflow)?;
    let without_vat = m
        .checked_mul(step)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(PricingError::Overflow)?;

    Ok(PriceQuote {
        with_vat: quantize2(with_vat),
        without_vat: quantize2(without_vat),
    })
}

/// Pin a value to exactly two fractional digits.
///
/// Grid values reaching this point are exact multiples of 0.01, so the
/// rounding strategy is never exercised; the rescale fixes the scale of
/// the representation.
fn quantize2(value: Decimal) -> Decimal {
    let mut quantized = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    quantized.rescale(2);
    quantized
}


// ── Property-Based Tests ────────────────────────────────────────────
