//! Mirror list resolution server.
//!
//! Maps (release, repo, arch) requests to ordered mirror URL lists through a
//! wildcard-aware lookup table loaded once at startup.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resolve;

pub use config::MirrorlistConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
