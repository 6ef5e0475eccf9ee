use pricing_api::router::create_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting pricing API service");

    let addr = std::env::var("PRICING_API_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // Create router
    let app = create_router();

    // Bind and serve
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
