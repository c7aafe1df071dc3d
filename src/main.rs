use std::error::Error;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;
use tracing::info;

const CONFIG_DIR_ENV: &str = "SHIFT_PAYROLL_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/payroll";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_dir =
        std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shift_payroll=info".into());
    if config.settings().logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let bind_address = config.settings().server.bind_address.clone();
    info!(
        config_dir = %config_dir,
        default_hourly_rate = config.default_hourly_rate(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(address = %bind_address, "shift-payroll server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
