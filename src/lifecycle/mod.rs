//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Validate → Initialize observability → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → server drains connections → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
