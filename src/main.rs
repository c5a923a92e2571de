use std::sync::Arc;

use commission_deadlines::api::{AppState, create_router};
use commission_deadlines::calendar::SystemClock;
use commission_deadlines::config::ConfigLoader;
use commission_deadlines::logging;
use commission_deadlines::service::OrderService;
use commission_deadlines::store::InMemoryStore;
use tracing::info;

const CONFIG_DIR_ENV: &str = "COMMISSION_DEADLINES_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config/colombia";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logger();

    let config_dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir)?;
    let settings = loader.config().settings();

    let store = Arc::new(InMemoryStore::with_holidays(
        loader.holiday_entries().to_vec(),
    ));
    let service = OrderService::new(store, Arc::new(SystemClock), loader.deadline_rules());
    let router = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_address).await?;
    info!(
        address = %settings.server.bind_address,
        deployment = %settings.name,
        "Commission deadline API listening"
    );
    axum::serve(listener, router).await?;

    Ok(())
}
