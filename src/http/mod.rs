//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, method/path policing)
//!     → request.rs (request ID)
//!     → [resolve subsystem produces the URL list]
//!     → response.rs (plain-text body, one URL per line)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
