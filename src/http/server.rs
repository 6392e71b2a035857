//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum Router with the mirror list route
//! - Wire up middleware (tracing, request timeout)
//! - Police method and path before the resolution core runs
//! - Map extractor and engine failures to client status codes
//! - Observability (access log, metrics, request IDs)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::schema::{MirrorMap, MirrorlistConfig};
use crate::http::request;
use crate::http::response;
use crate::observability::metrics;
use crate::resolve::{self, Qualifier};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub mirrors: Arc<MirrorMap>,
}

/// HTTP server for the mirror list service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: MirrorlistConfig) -> Self {
        let state = AppState {
            mirrors: Arc::new(config.mirrors.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &MirrorlistConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(mirrorlist_handler))
            .route("/{*path}", any(mirrorlist_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// The mirror list endpoint: GET / with arch, repo and release parameters.
async fn mirrorlist_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
) -> Response {
    let start = Instant::now();
    let request_id = request::request_id(req.headers());
    let method = req.method().clone();

    tracing::info!(
        request_id = %request_id,
        peer = %addr,
        method = %method,
        uri = %req.uri(),
        "Request received"
    );

    let mut response = if method != Method::GET {
        (StatusCode::BAD_REQUEST, "bad method\n").into_response()
    } else if req.uri().path() != "/" {
        // The catch-all route matches everything, so check that we're at
        // the root here.
        (StatusCode::NOT_FOUND, "not found\n").into_response()
    } else {
        serve_mirror_list(&state, &request_id, req.uri().query().unwrap_or(""))
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(request::X_REQUEST_ID, value);
    }

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

/// Extract the qualifier, resolve it, and map failures to status codes.
fn serve_mirror_list(state: &AppState, request_id: &str, query: &str) -> Response {
    let qualifier = match Qualifier::from_query(query) {
        Ok(q) => q,
        Err(e) => {
            tracing::debug!(request_id = %request_id, error = %e, "Rejected query string");
            return (StatusCode::BAD_REQUEST, format!("{e}\n")).into_response();
        }
    };

    match resolve::resolve(&state.mirrors, &qualifier) {
        Ok(urls) => {
            tracing::debug!(
                request_id = %request_id,
                release = %qualifier.release,
                repo = %qualifier.repo,
                arch = %qualifier.arch,
                count = urls.len(),
                "Resolved mirror list"
            );
            (StatusCode::OK, response::url_list(&urls)).into_response()
        }
        Err(e) => {
            tracing::debug!(request_id = %request_id, error = %e, "No mirror entry");
            (StatusCode::NOT_FOUND, format!("{e}\n")).into_response()
        }
    }
}
