//! Three-level mirror lookup with wildcard fallback.
//!
//! # Responsibilities
//! - Walk release → repo → arch through the mirror table
//! - Fall back to the "*" entry at each level independently
//! - Report which level failed on a miss
//! - Render the matched templates, skipping malformed entries

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::{MirrorMap, WILDCARD};
use crate::resolve::qualifier::Qualifier;
use crate::resolve::template;

/// Resolution failure: no exact or wildcard entry at one level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid release")]
    UnknownRelease,

    #[error("invalid repo")]
    UnknownRepo,

    #[error("invalid arch")]
    UnknownArch,
}

/// Exact lookup with wildcard fallback, shared by all three levels.
fn select<'a, T>(map: &'a HashMap<String, T>, key: &str) -> Option<&'a T> {
    map.get(key).or_else(|| map.get(WILDCARD))
}

/// Look up the URL template list for a qualifier, without rendering.
pub fn lookup_templates<'a>(
    mirrors: &'a MirrorMap,
    qualifier: &Qualifier,
) -> Result<&'a [String], ResolveError> {
    let repos =
        select(mirrors.releases(), &qualifier.release).ok_or(ResolveError::UnknownRelease)?;
    let archs = select(repos, &qualifier.repo).ok_or(ResolveError::UnknownRepo)?;
    let urls = select(archs, &qualifier.arch).ok_or(ResolveError::UnknownArch)?;
    Ok(urls)
}

/// Resolve a qualifier to its rendered mirror URLs, in configured order.
///
/// A template that fails to render is logged and skipped; the remaining
/// entries are still returned.
pub fn resolve(mirrors: &MirrorMap, qualifier: &Qualifier) -> Result<Vec<String>, ResolveError> {
    let templates = lookup_templates(mirrors, qualifier)?;

    let mut urls = Vec::with_capacity(templates.len());
    for tpl in templates {
        match template::render(tpl, qualifier) {
            Ok(url) => urls.push(url),
            Err(e) => {
                tracing::warn!(template = %tpl, error = %e, "Skipping malformed URL template");
            }
        }
    }

    Ok(urls)
}
