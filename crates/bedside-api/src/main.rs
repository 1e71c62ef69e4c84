use tracing_subscriber::EnvFilter;

use bedside_api::config::ApiConfig;
use bedside_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env();
    let catalog = config.load_catalog()?;
    let cors = config.cors_layer()?;

    let app = bedside_api::router(AppState { catalog }, cors);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
