//! Web server for DataShare.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::bot::{create_bot_router, BotState};
use crate::config::ServerConfig;
use crate::relay::RelayCoordinator;

use super::router::{create_cors_layer, create_health_router, create_static_router, create_ws_router};
use super::ws::WsState;

/// Web server hosting the stream transport, the bot webhook, and the
/// bundled web client.
pub struct WebServer {
    addr: SocketAddr,
    config: ServerConfig,
    ws_state: WsState,
    bot_state: BotState,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, coordinator: Arc<RelayCoordinator>, bot_state: BotState) -> Self {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .expect("Invalid web server address");

        Self {
            addr,
            config: config.clone(),
            ws_state: WsState::new(coordinator),
            bot_state,
        }
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> Router {
        let mut router = create_ws_router(self.ws_state.clone())
            .merge(create_bot_router(self.bot_state.clone()))
            .merge(create_health_router());

        if self.config.serve_static {
            if let Some(static_router) = create_static_router(&self.config.static_path) {
                router = router.merge(static_router);
            }
        }

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer())
                .layer(CompressionLayer::new()),
        )
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
