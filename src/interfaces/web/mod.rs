mod handlers;
mod router;

use anyhow::Result;
use tracing::info;

use crate::core::store::EventStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: EventStore,
}

pub struct ApiServer {
    host: String,
    port: u16,
    store: EventStore,
}

impl ApiServer {
    pub fn new(host: String, port: u16, store: EventStore) -> Self {
        Self { host, port, store }
    }

    /// Bind and serve until the process is stopped. Request handling never
    /// returns an error here; only bind/accept failures do.
    pub async fn serve(self) -> Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let app = router::build_router(AppState { store: self.store });

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Webhook service running at http://{addr}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
