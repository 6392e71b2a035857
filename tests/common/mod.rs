//! Shared utilities for integration testing.

use std::net::SocketAddr;

use mirrorlist::config::MirrorlistConfig;
use mirrorlist::http::HttpServer;
use mirrorlist::lifecycle::Shutdown;

/// Spawn the server on an ephemeral port and return its address.
///
/// Dropping the returned `Shutdown` closes the broadcast channel and stops
/// the server, so hold it for the test's duration.
pub async fn spawn_server(config: MirrorlistConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
