mod config;
mod core;
mod interfaces;
mod logging;

use anyhow::Result;
use tracing::info;

use crate::config::ServiceConfig;
use crate::core::store::EventStore;
use crate::interfaces::web::ApiServer;

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(e) = run().await {
        tracing::error!("hooksink failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ServiceConfig::load(&args);
    info!(
        "Starting hooksink (db: {}, bind: {}:{})",
        config.db_path.display(),
        config.host,
        config.port
    );

    let store = EventStore::open(&config.db_path)?;
    ApiServer::new(config.host, config.port, store).serve().await
}
