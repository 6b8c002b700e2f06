use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::dataset::load_dataset;

pub struct ServerService {
    config: AppConfig,
}

impl ServerService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let dataset = load_dataset(&self.config.dataset)?;
        info!("Serving recommendations for {} users", dataset.user_count());

        let port = self.config.server.port;
        let state = Arc::new(AppState {
            dataset,
            config: self.config,
        });

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Server is running on http://localhost:{}", port);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
