//! Qualifier extraction from the request query string.
//!
//! # Responsibilities
//! - Decode the raw query string into key/value pairs
//! - Require each of `arch`, `repo`, `release` exactly once, non-empty
//! - Lowercase `repo`; `arch` and `release` pass through verbatim

use thiserror::Error;

/// The validated (arch, repo, release) triple for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    pub arch: String,
    pub repo: String,
    pub release: String,
}

/// Errors produced while extracting a [`Qualifier`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QualifierError {
    /// The parameter is absent from the query string.
    #[error("{0} not specified")]
    MissingParameter(&'static str),

    /// The parameter appears more than once. Ambiguous input is rejected
    /// rather than resolved by taking the first value.
    #[error("{0} specified more than once")]
    DuplicateParameter(&'static str),

    /// The parameter is present but empty.
    #[error("{0} is empty")]
    EmptyParameter(&'static str),
}

impl Qualifier {
    /// Extract and validate the triple from a raw query string.
    pub fn from_query(query: &str) -> Result<Self, QualifierError> {
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        let arch = param_once(&pairs, "arch")?;
        let repo = param_once(&pairs, "repo")?.to_lowercase();
        let release = param_once(&pairs, "release")?;

        Ok(Self {
            arch,
            repo,
            release,
        })
    }
}

/// Select the value of `name`, requiring exactly one non-empty occurrence.
fn param_once(pairs: &[(String, String)], name: &'static str) -> Result<String, QualifierError> {
    let mut values = pairs
        .iter()
        .filter(|(k, _)| k.as_str() == name)
        .map(|(_, v)| v);

    let value = values
        .next()
        .ok_or(QualifierError::MissingParameter(name))?;
    if values.next().is_some() {
        return Err(QualifierError::DuplicateParameter(name));
    }
    if value.is_empty() {
        return Err(QualifierError::EmptyParameter(name));
    }

    Ok(value.clone())
}
