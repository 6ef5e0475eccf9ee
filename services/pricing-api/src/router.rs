use crate::handlers::{health, prices};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/optimal_calc_prices", post(prices::optimal_calc_prices))
        .route("/", get(health::root))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
