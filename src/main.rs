use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_VAR: &str = "LEAVE_ENGINE_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.bind_address().to_string();
    info!(
        config_dir = %config_dir,
        office = %config.office().name,
        holidays = config.holidays().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Leave engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}
