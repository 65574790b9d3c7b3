//! HTTP server implementation for the docket item store.
//!
//! Serves the four-endpoint REST surface over an in-process [`ItemStore`]:
//! root greeting, create item, list items, and get item by position. The
//! store is owned by the shared application state and injected into the
//! handlers; nothing survives a process restart.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use docket_core::{Error, Item, ItemStore, Result};
use docket_telemetry::RequestMetrics;

use crate::api::{ErrorBody, ListQuery};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.unwrap_or_else(|| "0.0.0.0:8080".parse().unwrap()),
            cors: self.cors.unwrap_or(true),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The item store backing every request.
    pub store: ItemStore,
    /// Request counters, reported at shutdown.
    pub metrics: RequestMetrics,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(),
            metrics: RequestMetrics::new(),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new()),
        }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/", get(root))
            .route("/items", post(create_item).get(list_items))
            .route("/items/{item_id}", get(get_item))
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting docket server");
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| Error::internal(e.to_string()))?;

        let metrics = &self.state.metrics;
        tracing::info!(
            uptime_seconds = self.state.start_time.elapsed().as_secs(),
            items_created = metrics.items_created(),
            list_requests = metrics.list_requests(),
            lookup_hits = metrics.lookup_hits(),
            lookup_misses = metrics.lookup_misses(),
            "Server shutdown complete"
        );
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Error Response ===

fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(detail))).into_response()
}

/// Maps a store error to its HTTP response.
fn store_error(err: Error) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, err.to_string())
}

// === Handlers ===

/// `GET /`: fixed greeting; doubles as the liveness check.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"Hello": "World"}))
}

/// `POST /items`: appends an item, responds with the full sequence.
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(item): Json<Item>,
) -> Json<Vec<Item>> {
    let items = state.store.append(item);
    state.metrics.record_created();
    tracing::debug!(total = items.len(), "Item appended");
    Json(items)
}

/// `GET /items?limit=`: first `limit` items in insertion order.
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Item>> {
    let items = state.store.list(query.limit);
    state.metrics.record_list();
    tracing::debug!(limit = query.limit, returned = items.len(), "Items listed");
    Json(items)
}

/// `GET /items/{item_id}`: item at the given position, or 404.
async fn get_item(State(state): State<Arc<AppState>>, Path(item_id): Path<i64>) -> Response {
    match state.store.get(item_id) {
        Ok(item) => {
            state.metrics.record_lookup_hit();
            Json(item).into_response()
        }
        Err(err) => {
            state.metrics.record_lookup_miss();
            tracing::debug!(item_id, "Item lookup failed");
            store_error(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder()
            .addr("127.0.0.1:3000".parse().unwrap())
            .cors(false)
            .build();

        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(!config.cors);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::builder().build();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert!(config.cors);
    }

    #[test]
    fn test_router_builds() {
        // Route registration panics on malformed paths.
        let _with_cors = Server::new(ServerConfig::default()).router();
        let _without_cors = Server::new(ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            cors: false,
        })
        .router();
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let Json(body) = root().await;
        assert_eq!(body, serde_json::json!({"Hello": "World"}));
    }

    #[tokio::test]
    async fn test_create_returns_full_list() {
        let state = state();

        let Json(items) =
            create_item(State(state.clone()), Json(Item::new("Buy groceries"))).await;
        assert_eq!(items.len(), 1);

        let Json(items) =
            create_item(State(state.clone()), Json(Item::new("Walk the dog").done())).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text.as_deref(), Some("Buy groceries"));
        assert_eq!(items[1].text.as_deref(), Some("Walk the dog"));
        assert!(items[1].is_done);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let Json(items) = list_items(State(state()), Query(ListQuery::default())).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let state = state();
        for i in 0..4 {
            state.store.append(Item::new(format!("task {i}")));
        }

        let Json(items) = list_items(State(state.clone()), Query(ListQuery { limit: 2 })).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text.as_deref(), Some("task 0"));

        // Default limit covers the whole store here
        let Json(items) = list_items(State(state.clone()), Query(ListQuery::default())).await;
        assert_eq!(items.len(), 4);

        let Json(items) = list_items(State(state), Query(ListQuery { limit: -1 })).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_item_by_position() {
        let state = state();
        state.store.append(Item::new("first"));
        state.store.append(Item::new("second"));

        let response = get_item(State(state.clone()), Path(0)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"text": "first", "is_done": false}));

        let response = get_item(State(state), Path(1)).await;
        assert_eq!(body_json(response).await["text"], "second");
    }

    #[tokio::test]
    async fn test_get_item_past_end_is_404() {
        let state = state();
        state.store.append(Item::new("first"));
        state.store.append(Item::new("second"));

        let response = get_item(State(state), Path(2)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"detail": "Item id 2 not found"}));
    }

    #[tokio::test]
    async fn test_get_item_on_empty_store_is_404() {
        let response = get_item(State(state()), Path(99)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["detail"],
            "Item id 99 not found"
        );
    }

    #[tokio::test]
    async fn test_get_item_negative_position_is_404() {
        let state = state();
        state.store.append(Item::new("only"));

        let response = get_item(State(state), Path(-1)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["detail"],
            "Item id -1 not found"
        );
    }

    #[tokio::test]
    async fn test_metrics_recorded_per_request() {
        let state = state();

        create_item(State(state.clone()), Json(Item::default())).await;
        list_items(State(state.clone()), Query(ListQuery::default())).await;
        get_item(State(state.clone()), Path(0)).await;
        get_item(State(state.clone()), Path(7)).await;

        assert_eq!(state.metrics.items_created(), 1);
        assert_eq!(state.metrics.list_requests(), 1);
        assert_eq!(state.metrics.lookup_hits(), 1);
        assert_eq!(state.metrics.lookup_misses(), 1);
    }
}
