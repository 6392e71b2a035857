//! Mirror resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming query string (arch, repo, release)
//!     → qualifier.rs (validate + normalize into a Qualifier)
//!     → engine.rs (three-level lookup with wildcard fallback)
//!     → template.rs (placeholder substitution per URL)
//!     → Return: ordered rendered URLs, or which level failed
//! ```
//!
//! # Design Decisions
//! - The mirror table is immutable at runtime (thread-safe without locks)
//! - Resolution is a pure function of (Qualifier, MirrorMap)
//! - Exact match wins at each level; the "*" entry is the fallback
//! - A malformed URL template is skipped, never fatal to the response

pub mod engine;
pub mod qualifier;
pub mod template;

pub use engine::{resolve, ResolveError};
pub use qualifier::{Qualifier, QualifierError};
pub use template::{render, TemplateError};
