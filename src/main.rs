use std::error::Error;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use globalreg::answer::create_provider;
use globalreg::config::AppConfig;
use globalreg::routes::configure_routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine; demo mode covers the no-key case.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_env()?;
    let provider = create_provider(&config);
    let routes = configure_routes(provider);

    info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
