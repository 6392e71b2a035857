//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → loader.rs (parse & deserialize)
//!     → normalization (repo keys lowercased)
//!     → validation.rs (semantic checks)
//!     → MirrorlistConfig (validated, immutable)
//!     → mirror table shared via Arc with the request handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields except the mirror table have defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::MirrorMap;
pub use schema::MirrorlistConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
