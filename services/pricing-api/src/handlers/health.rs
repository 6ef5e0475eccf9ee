use axum::http::StatusCode;

/// Liveness probe; the contract defines no response body.
pub async fn root() -> StatusCode {
    StatusCode::OK
}
