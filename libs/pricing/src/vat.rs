//! VAT rate type and the discretization grid it induces
//!
//! A gross price is `net * (100 + p) / 100`. For the gross price to land
//! on two decimal digits, the net price (in hundredths) must be a multiple
//! of a step determined by `gcd(100, 100 + p)`. [`VatRate::grid_step`]
//! derives that step.

use crate::errors::PricingError;
use std::fmt;

/// Integer VAT percentage in the closed range [0, 99].
///
/// Rates of 100% and above would make the net-price computation degenerate
/// and are excluded by contract; [`VatRate::new`] is the only constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VatRate(u8);

impl VatRate {
    /// Largest representable rate.
    pub const MAX_PERCENT: u8 = 99;

    /// Validate and wrap an integer percentage.
    pub fn new(percent: u8) -> Result<Self, PricingError> {
        if percent > Self::MAX_PERCENT {
            return Err(PricingError::VatRateOutOfRange { value: percent });
        }
        Ok(Self(percent))
    }

    /// The percentage as an integer.
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Numerator of the gross multiplier: `100 + percent`.
    pub fn gross_numerator(&self) -> u32 {
        100 + u32::from(self.0)
    }

    /// Minimal step, in hundredths of a currency unit, of the net-price grid.
    ///
    /// Net prices of the form `m * step / 100` (integer `m`) are exactly the
    /// ones whose gross counterpart `m * step * (100 + p) / 10000` has two
    /// decimal digits: `step * (100 + p)` is divisible by 100 by the gcd
    /// construction.
    pub fn grid_step(&self) -> u32 {
        100 / gcd(100, self.gross_numerator())
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_range() {
        assert!(VatRate::new(0).is_ok());
        assert!(VatRate::new(99).is_ok());
        assert_eq!(
            VatRate::new(100),
            Err(PricingError::VatRateOutOfRange { value: 100 })
        );
        assert_eq!(
            VatRate::new(255),
            Err(PricingError::VatRateOutOfRange { value: 255 })
        );
    }

    #[test]
    fn test_grid_step_table() {
        // (percent, expected step in hundredths)
        let cases = [
            (0u8, 1u32),
            (1, 100),
            (2, 50),
            (4, 25),
            (5, 20),
            (10, 10),
            (18, 50),
            (20, 5),
            (25, 4),
            (50, 2),
            (75, 4),
            (99, 100),
        ];
        for (percent, step) in cases {
            let rate = VatRate::new(percent).unwrap();
            assert_eq!(rate.grid_step(), step, "vat {}", percent);
        }
    }

    #[test]
    fn test_step_times_gross_divisible_by_100() {
        // The defining property of the step: applying VAT to one grid
        // increment never produces residual fractions of a cent.
        for percent in 0..=VatRate::MAX_PERCENT {
            let rate = VatRate::new(percent).unwrap();
            assert_eq!(
                rate.grid_step() * rate.gross_numerator() % 100,
                0,
                "vat {}",
                percent
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(VatRate::new(18).unwrap().to_string(), "18%");
    }
}
