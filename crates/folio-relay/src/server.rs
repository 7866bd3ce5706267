//! Router assembly and the listening loop.

use crate::config::RelayConfig;
use crate::mailer::Mailer;
use crate::routes::{AppState, routes};
use crate::{Error, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// The relay server.
pub struct Server {
    config: RelayConfig,
    mailer: Arc<dyn Mailer>,
}

impl Server {
    /// Create a server delivering through `mailer`.
    pub fn new(config: RelayConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    /// Configuration the server runs with.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Build the router with body limit, CORS and request tracing.
    ///
    /// Without `CLIENT_URI` no CORS headers are sent, so browsers only reach
    /// the relay from its own origin.
    pub fn router(&self) -> Result<Router> {
        let state = AppState {
            mailer: Arc::clone(&self.mailer),
            sender: self.config.mail_id.clone(),
            recipient: self.config.recipient().to_string(),
        };
        let mut router = routes(state).layer(DefaultBodyLimit::max(self.config.body_limit));

        if let Some(origin) = &self.config.client_uri {
            let origin = HeaderValue::from_str(origin)
                .map_err(|_| Error::Config(format!("CLIENT_URI is not a valid origin: '{origin}'")))?;
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_credentials(true)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE]),
            );
        }

        Ok(router.layer(TraceLayer::new_for_http()))
    }

    /// Bind and serve until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        let router = self.router()?;
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, recipient = %self.config.recipient(), "Relay listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Relay stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
