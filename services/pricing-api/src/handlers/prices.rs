use crate::error::AppError;
use crate::models::{PriceRequest, PriceResponse};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use pricing::correction::correct_price;
use pricing::vat::VatRate;

pub async fn optimal_calc_prices(
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<Json<PriceResponse>, AppError> {
    // 1. Surface body/schema problems in the standard error shape instead of
    //    axum's plain-text rejection (malformed decimals land here).
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    // 2. Range-validate the rate, then run the correction.
    let rate = VatRate::new(req.proc_nds)?;
    let quote = correct_price(req.input_price_with_nds, rate)?;

    tracing::debug!(
        input = %req.input_price_with_nds,
        vat = %rate,
        with_vat = %quote.with_vat,
        without_vat = %quote.without_vat,
        "price corrected"
    );

    Ok(Json(PriceResponse {
        corrected_price_with_nds: quote.with_vat,
        corrected_price_without_nds: quote.without_vat,
    }))
}
