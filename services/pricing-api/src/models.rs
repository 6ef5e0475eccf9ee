use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body of `POST /optimal_calc_prices`.
///
/// The price is a decimal string on the wire (up to 20 fractional digits);
/// `proc_nds` is range-checked against [`pricing::vat::VatRate`] in the
/// handler, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRequest {
    pub input_price_with_nds: Decimal,
    pub proc_nds: u8,
}

/// Success body: both prices carry exactly two fractional digits and
/// serialize as strings.
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub corrected_price_with_nds: Decimal,
    pub corrected_price_without_nds: Decimal,
}
